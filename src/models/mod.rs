pub mod assessment;
pub mod recommendation_response;
pub mod product_card;
pub mod chat_message;
pub mod toast;
pub mod app_state;

pub use assessment::Assessment;
pub use recommendation_response::{RecommendationResponse, SUCCESS_STATUS};
pub use product_card::ProductCard;
pub use chat_message::{ChatMessage, Role};
pub use toast::{Toast, ToastVariant};
pub use app_state::AppState;
