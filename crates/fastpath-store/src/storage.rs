use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Opaque wrapper around the underlying storage engine (sled).
#[derive(Clone)]
pub struct Store {
    db: sled::Db,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let db = sled::open(path)
            .with_context(|| format!("failed to open road store at {}", path.display()))?;
        Ok(Self { db })
    }

    pub fn open_tree(&self, name: &str) -> Result<Tree> {
        let tree = self
            .db
            .open_tree(name)
            .with_context(|| format!("failed to open tree {name}"))?;
        Ok(Tree { inner: tree })
    }

    pub fn flush(&self) -> Result<()> {
        self.db.flush().context("failed to flush road store")?;
        Ok(())
    }
}

/// Opaque wrapper around a storage keyspace/tree.
#[derive(Clone)]
pub struct Tree {
    inner: sled::Tree,
}

impl Tree {
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<Vec<u8>>> {
        Ok(self.inner.get(key)?.map(|iv| iv.to_vec()))
    }

    pub fn insert<K: AsRef<[u8]>, V: AsRef<[u8]>>(&self, key: K, value: V) -> Result<()> {
        self.inner.insert(key, value.as_ref())?;
        Ok(())
    }

    /// Read and bincode-decode the value under `key`.
    pub fn get_decoded<K: AsRef<[u8]>, T: DeserializeOwned>(&self, key: K) -> Result<Option<T>> {
        match self.inner.get(key)? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).context("corrupt record")?,
            )),
            None => Ok(None),
        }
    }

    pub fn insert_encoded<K: AsRef<[u8]>, T: Serialize>(&self, key: K, value: &T) -> Result<()> {
        let bytes = bincode::serialize(value)?;
        self.insert(key, bytes)
    }

    pub fn contains_key<K: AsRef<[u8]>>(&self, key: K) -> Result<bool> {
        Ok(self.inner.contains_key(key)?)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Decoded values in key order.
    pub fn values<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.iter()
            .map(|item| {
                let (_, bytes) = item?;
                Ok(bincode::deserialize(&bytes).context("corrupt record")?)
            })
            .collect()
    }

    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.inner.name()).to_string()
    }
}

pub struct Iter {
    inner: sled::Iter,
}

impl Iterator for Iter {
    type Item = Result<(Vec<u8>, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(Ok((k, v))) => Some(Ok((k.to_vec(), v.to_vec()))),
            Some(Err(e)) => Some(Err(anyhow::Error::new(e))),
            None => None,
        }
    }
}
