use crate::models::chat::{ChatRequest, ChatTurn};
use crate::models::itinerary::ItineraryStep;
use crate::services::gemini_service::{
    Content, GeminiError, GeminiService, GenerateOptions, Grounding, Part,
};
use std::env;

const DEFAULT_CHAT_MODEL: &str = "gemini-2.0-flash";

/// Conversational assistant that answers questions about a generated trip.
pub struct ChatService {
    gemini: GeminiService,
    model: String,
}

impl ChatService {
    pub fn new(gemini: GeminiService) -> Self {
        let model = env::var("GEMINI_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        Self { gemini, model }
    }

    /// Answer one user message. Search grounding is enabled so the model can
    /// pull in live information about the places being discussed. The reply
    /// may be empty; the caller passes it through as-is.
    pub async fn respond(&self, request: &ChatRequest) -> Result<String, GeminiError> {
        let mut contents = build_history(request);
        contents.push(Content::user(request.message.as_str()));

        self.gemini
            .generate_content(
                &self.model,
                contents,
                &GenerateOptions {
                    json_response: false,
                    grounding: Some(Grounding::Search),
                },
            )
            .await
    }
}

/// Conversation to replay before the new message. A fresh chat gets seeded
/// with the trip context and a canned acknowledgement; an ongoing chat
/// replays the client's history unchanged (the seed is already in it).
fn build_history(request: &ChatRequest) -> Vec<Content> {
    if !request.history.is_empty() {
        return request.history.iter().map(to_content).collect();
    }

    let itinerary = request.itinerary.as_deref().unwrap_or(&[]);
    let context = build_context(&request.city, &request.basecamp, itinerary);
    let acknowledgement = format!(
        "I understand! I'm here to help you with your trip to {}. I can see your itinerary \
         and I'm ready to answer any questions about the places you'll visit, give \
         recommendations, or help with logistics. What would you like to know?",
        request.city
    );

    vec![Content::user(context), Content::model(acknowledgement)]
}

fn to_content(turn: &ChatTurn) -> Content {
    Content {
        role: turn.role.clone(),
        parts: turn
            .parts
            .iter()
            .map(|p| Part {
                text: p.text.clone(),
            })
            .collect(),
    }
}

/// System-style context describing the trip and the current itinerary.
fn build_context(city: &str, basecamp: &str, itinerary: &[ItineraryStep]) -> String {
    let mut context = format!(
        "You are a helpful travel assistant. The user is planning a trip to {} and staying at \"{}\".",
        city, basecamp
    );

    if !itinerary.is_empty() {
        context.push_str(&format!(
            "\n\nTheir current itinerary has {} stops:\n",
            itinerary.len()
        ));
        for (index, stop) in itinerary.iter().enumerate() {
            context.push_str(&format!("\nStop {}: {} at {}", index + 1, stop.title, stop.time));
            context.push_str(&format!("\n  - {}", stop.description));
            context.push_str(&format!("\n  - Address: {}", stop.address));
            if !stop.stops.is_empty() {
                context.push_str(&format!("\n  - Nearby: {}", stop.stops.join(", ")));
            }
        }
        context.push_str("\n\nYou can reference these stops when answering questions.");
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatPart;

    fn sample_step(title: &str, nearby: Vec<&str>) -> ItineraryStep {
        ItineraryStep {
            id: 1,
            time: "9:00 AM".to_string(),
            title: title.to_string(),
            description: "A place worth seeing.".to_string(),
            image_keyword: "keyword".to_string(),
            address: "1 Example St".to_string(),
            coordinates: None,
            stops: nearby.into_iter().map(str::to_string).collect(),
            color: "blue".to_string(),
            image_url: None,
            notes: None,
            travel_time_from_previous: None,
        }
    }

    fn request(history: Vec<ChatTurn>, itinerary: Option<Vec<ItineraryStep>>) -> ChatRequest {
        ChatRequest {
            city: "Tokyo".to_string(),
            basecamp: "Park Hyatt Tokyo".to_string(),
            message: "Which stop is best at night?".to_string(),
            history,
            itinerary,
        }
    }

    #[test]
    fn test_context_without_itinerary_is_one_line() {
        let context = build_context("Tokyo", "Park Hyatt Tokyo", &[]);
        assert!(context.contains("trip to Tokyo"));
        assert!(context.contains("\"Park Hyatt Tokyo\""));
        assert!(!context.contains("itinerary has"));
    }

    #[test]
    fn test_context_lists_each_stop() {
        let steps = vec![
            sample_step("Senso-ji", vec!["Nakamise Street"]),
            sample_step("Shibuya Sky", vec![]),
        ];
        let context = build_context("Tokyo", "Park Hyatt Tokyo", &steps);

        assert!(context.contains("itinerary has 2 stops"));
        assert!(context.contains("Stop 1: Senso-ji at 9:00 AM"));
        assert!(context.contains("Stop 2: Shibuya Sky at 9:00 AM"));
        assert!(context.contains("Nearby: Nakamise Street"));
        assert!(context.contains("reference these stops"));
    }

    #[test]
    fn test_nearby_line_omitted_when_no_stops() {
        let steps = vec![sample_step("Shibuya Sky", vec![])];
        let context = build_context("Tokyo", "Park Hyatt Tokyo", &steps);
        assert!(!context.contains("Nearby:"));
    }

    #[test]
    fn test_fresh_chat_is_seeded_with_context_and_ack() {
        let contents = build_history(&request(vec![], Some(vec![sample_step("Senso-ji", vec![])])));

        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "user");
        assert!(contents[0].parts[0].text.contains("travel assistant"));
        assert!(contents[0].parts[0].text.contains("Senso-ji"));
        assert_eq!(contents[1].role, "model");
        assert!(contents[1].parts[0].text.contains("trip to Tokyo"));
    }

    #[test]
    fn test_existing_history_is_replayed_unchanged() {
        let history = vec![
            ChatTurn {
                role: "user".to_string(),
                parts: vec![ChatPart {
                    text: "earlier question".to_string(),
                }],
            },
            ChatTurn {
                role: "model".to_string(),
                parts: vec![ChatPart {
                    text: "earlier answer".to_string(),
                }],
            },
        ];
        let contents = build_history(&request(history, None));

        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].parts[0].text, "earlier question");
        assert_eq!(contents[1].role, "model");
        // No seeded context when the client brought its own history.
        assert!(!contents[0].parts[0].text.contains("travel assistant"));
    }
}
