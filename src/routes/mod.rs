pub mod chat;
pub mod health;
pub mod itinerary;
pub mod location;
pub mod travel_info;
