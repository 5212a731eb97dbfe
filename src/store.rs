use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// A record type that can live in a [`Store`]
///
/// Implementors describe how a validated create payload becomes a record and
/// how a partial update payload is merged into an existing one.
pub trait Record: Clone + Send + Sync + 'static {
    /// Payload accepted by [`Store::create`]
    type Create: Send;
    /// Partial payload accepted by [`Store::update`]
    type Update: Send;

    /// Build a new record from a create payload
    fn from_create(id: u64, created_at: DateTime<Utc>, payload: Self::Create) -> Self;

    /// Merge a partial update into this record
    ///
    /// Must never touch `id` or `created_at`.
    fn apply_update(&mut self, update: Self::Update);

    fn id(&self) -> u64;
}

struct Inner<R> {
    records: Vec<R>,
    next_id: u64,
}

impl<R: Record> Inner<R> {
    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

/// In-memory, insertion-ordered collection of records with an id counter
///
/// The collection and the counter share one lock: mutations are serialized
/// behind the write half, reads may proceed concurrently with each other.
/// Ids start at 1 and are never reused, even after deletes.
pub struct Store<R> {
    inner: RwLock<Inner<R>>,
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Store<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// All records in insertion order
    pub async fn list_all(&self) -> Vec<R> {
        self.inner.read().await.records.clone()
    }

    /// Records matching `predicate`, in insertion order
    pub async fn select<F>(&self, predicate: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        let inner = self.inner.read().await;
        inner
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: u64) -> Option<R> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Append a new record built from `payload` and return it
    pub async fn create(&self, payload: R::Create) -> R {
        let mut inner = self.inner.write().await;
        let record = R::from_create(inner.next_id, Utc::now(), payload);
        inner.records.push(record.clone());
        inner.next_id += 1;
        record
    }

    /// Merge `update` into the record with `id`
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub async fn update(&self, id: u64, update: R::Update) -> Option<R> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        let record = &mut inner.records[index];
        record.apply_update(update);
        Some(record.clone())
    }

    /// Remove the record with `id`, returning it
    pub async fn delete(&self, id: u64) -> Option<R> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        Some(inner.records.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}
