use actix_web::{web, HttpResponse, Responder};

use crate::models::chat::{ChatRequest, ChatResponse};
use crate::services::chat_service::ChatService;
use crate::services::gemini_service::GeminiService;

/*
    POST /api/chat
*/
pub async fn chat(payload: web::Json<ChatRequest>) -> impl Responder {
    let req = payload.into_inner();

    if req.city.is_empty() || req.message.is_empty() {
        return HttpResponse::BadRequest().json(ChatResponse::err("Missing required fields"));
    }

    let gemini = match GeminiService::new() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to initialize Gemini service: {}", err);
            return HttpResponse::InternalServerError()
                .json(ChatResponse::err("API key not configured"));
        }
    };

    let assistant = ChatService::new(gemini);
    match assistant.respond(&req).await {
        Ok(reply) => HttpResponse::Ok().json(ChatResponse::ok(reply)),
        Err(err) => {
            eprintln!("Chat completion failed: {}", err);
            HttpResponse::InternalServerError().json(ChatResponse::err("Failed to get response"))
        }
    }
}
