//! Ports - interfaces implemented by outer layers

pub mod conversation_store;
pub mod model_gateway;
pub mod progress;
pub mod summarizer;
pub mod turn_logger;

pub use conversation_store::{ConversationStore, StoreError};
pub use model_gateway::{
    GatewayError, ModelGateway, query_models_parallel, query_models_parallel_with,
};
pub use progress::{CouncilProgress, NoProgress};
pub use summarizer::{SummarizeError, Summarizer};
pub use turn_logger::{NoTurnLogger, TurnEvent, TurnLogger};
