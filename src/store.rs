//! Storage gateway for timer records
//!
//! One long-lived client bound to the `timers` collection of `timerdb`.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use tracing::info;

use crate::{
    config::Config,
    errors::StoreError,
    timer::{decode_timers, Timer},
};

pub const DATABASE_NAME: &str = "timerdb";
pub const COLLECTION_NAME: &str = "timers";
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
pub trait TimerStore: Send + Sync {
    async fn insert(&self, timer: &Timer) -> Result<(), StoreError>;
    async fn find_all(&self) -> Result<Vec<Timer>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct MongoTimerStore {
    collection: Collection<Document>,
}

impl MongoTimerStore {
    /// Connects and pings the deployment. The ping is not bounded by
    /// [`OPERATION_TIMEOUT`].
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.connection_uri()).await?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        info!("pinged deployment, connected to MongoDB");

        Ok(Self {
            collection: client
                .database(DATABASE_NAME)
                .collection::<Document>(COLLECTION_NAME),
        })
    }
}

#[async_trait]
impl TimerStore for MongoTimerStore {
    async fn insert(&self, timer: &Timer) -> Result<(), StoreError> {
        with_deadline(async {
            self.collection
                .clone_with_type::<Timer>()
                .insert_one(timer)
                .await?;
            Ok::<_, StoreError>(())
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<Timer>, StoreError> {
        with_deadline(async {
            let mut cursor = self.collection.find(doc! {}).await?;
            let mut documents = Vec::new();
            while cursor.advance().await? {
                documents.push(cursor.deserialize_current()?);
            }
            Ok::<_, StoreError>(decode_timers(documents))
        })
        .await
    }
}

async fn with_deadline<T, F>(operation: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(OPERATION_TIMEOUT, operation)
        .await
        .map_err(|_| StoreError::Timeout)?
}
