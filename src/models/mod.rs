pub mod chat;
pub mod itinerary;
pub mod travel_info;
