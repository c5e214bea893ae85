pub mod event;

pub use event::{
    CreateEventRequest, DateRange, Event, EventCreated, EventRangeQuery, Message, NewEvent,
};
