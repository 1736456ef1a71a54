pub mod chat_service;
pub mod currency_service;
pub mod deeplink_service;
pub mod emergency_service;
pub mod export_service;
pub mod gemini_service;
pub mod generation_service;
pub mod json_extraction;
pub mod pexels_service;
pub mod prompts;
pub mod validation_service;
pub mod weather_service;
