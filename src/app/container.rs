use std::sync::Arc;

use crate::adapters::{FsLocalAdapter, MeltAdapter, TokioProcessAdapter, TracingLogAdapter};
use crate::app::split_interactor::SplitInteractor;
use crate::domain::model::SplitSettings;
use crate::domain::rules::{SegmentationStrategy, StrategyKind};
use crate::ports::{FsPort, LogLevel, LogPort, MeltPort, ProcessPort};

pub trait AppContainer: Send + Sync {
    fn split_interactor(&self) -> Arc<SplitInteractor>;
}

/// Wires the production adapters
pub struct DefaultAppContainer {
    split_interactor: Arc<SplitInteractor>,
}

impl DefaultAppContainer {
    pub fn new(settings: SplitSettings, strategy: StrategyKind, log_level: LogLevel) -> Self {
        let process_port = Arc::new(TokioProcessAdapter::new());
        let melt_port = Arc::new(MeltAdapter::new(
            settings.melt.clone(),
            Arc::clone(&process_port) as Arc<dyn ProcessPort>,
        ));
        let fs_port = Arc::new(FsLocalAdapter::new());
        let log_port = Arc::new(TracingLogAdapter::new(log_level));
        let strategy: Arc<dyn SegmentationStrategy> =
            Arc::from(strategy.build(settings.include_trailing));

        let split_interactor = Arc::new(SplitInteractor::new(
            melt_port as Arc<dyn MeltPort>,
            fs_port as Arc<dyn FsPort>,
            log_port as Arc<dyn LogPort>,
            strategy,
            settings,
        ));

        Self { split_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn split_interactor(&self) -> Arc<SplitInteractor> {
        Arc::clone(&self.split_interactor)
    }
}
