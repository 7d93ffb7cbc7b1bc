//! Shared server state
//!
//! The dataset is an immutable snapshot behind an `Arc`, swapped whole on
//! reload. Label writes go through one mutex so the file is rewritten by a
//! single writer at a time.

use dsreview_core::ReviewDataset;
use dsreview_store::{load_dataset, LabelStore, ReviewConfig};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

pub struct AppState {
    pub config: ReviewConfig,
    dataset: RwLock<Arc<ReviewDataset>>,
    labels: Arc<Mutex<LabelStore>>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Load the exports and open the label file named by `config`
    ///
    /// # Errors
    ///
    /// Propagates dataset load and label file errors
    pub fn load(config: ReviewConfig) -> dsreview_store::Result<Self> {
        let dataset = load_dataset(&config)?;
        let labels = LabelStore::open(config.labels_path())?;
        Ok(Self::new(config, dataset, labels))
    }

    pub fn new(config: ReviewConfig, dataset: ReviewDataset, labels: LabelStore) -> Self {
        Self {
            config,
            dataset: RwLock::new(Arc::new(dataset)),
            labels: Arc::new(Mutex::new(labels)),
        }
    }

    /// Current dataset snapshot
    pub async fn dataset(&self) -> Arc<ReviewDataset> {
        self.dataset.read().await.clone()
    }

    pub fn labels(&self) -> &Mutex<LabelStore> {
        &self.labels
    }

    /// Exclusive label access that can move onto a blocking thread
    pub async fn lock_labels(&self) -> OwnedMutexGuard<LabelStore> {
        Arc::clone(&self.labels).lock_owned().await
    }

    /// Re-read the exports and the label file, replacing both
    ///
    /// On failure the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Propagates dataset load and label file errors
    pub async fn reload(&self) -> dsreview_store::Result<Arc<ReviewDataset>> {
        let config = self.config.clone();
        let loaded = tokio::task::spawn_blocking(move || {
            let dataset = load_dataset(&config)?;
            let labels = LabelStore::open(config.labels_path())?;
            Ok::<_, dsreview_core::ExError>((dataset, labels))
        })
        .await
        .map_err(|e| {
            dsreview_core::ExError::new(dsreview_core::ExErrorKind::Internal)
                .with_op("reload")
                .with_message(e.to_string())
        })??;

        let (dataset, labels) = loaded;
        let dataset = Arc::new(dataset);
        // Lock order: labels, then dataset
        let mut label_guard = self.labels.lock().await;
        *self.dataset.write().await = dataset.clone();
        *label_guard = labels;
        Ok(dataset)
    }
}
