use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use chrono::Local;

use crate::models::{CreateEventRequest, EventCreated, EventRangeQuery, Message};
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

const EVENT_ADDED: &str = "The event has been added!";
const EVENT_DELETED: &str = "The event has been deleted!";
const EVENT_NOT_FOUND: &str = "The event doesn't exist!";

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let new_event = request.validate()?;

    let id = state.store.insert(&new_event).await?;

    Ok(created(EventCreated {
        message: EVENT_ADDED,
        id,
        event: new_event.event,
        date: new_event.date,
    }))
}

pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<EventRangeQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let events = match query.validate()? {
        Some(range) => state.store.by_date_range(range).await?,
        None => state.store.all().await?,
    };

    Ok(success(events))
}

/// Events dated on the server's current local day.
pub async fn list_today(State(state): State<AppState>) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let events = state.store.by_date(today).await?;

    tracing::debug!(date = %today, count = events.len(), "Listed today's events");
    Ok(success(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    event_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let event_id = parse_event_id(event_id)?;

    match state.store.by_id(event_id).await? {
        Some(event) => Ok(success(event)),
        None => Err(AppError::NotFound(EVENT_NOT_FOUND.to_string())),
    }
}

pub async fn delete_event(
    State(state): State<AppState>,
    event_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let event_id = parse_event_id(event_id)?;

    if state.store.delete_by_id(event_id).await? {
        Ok(success(Message {
            message: EVENT_DELETED,
        }))
    } else {
        Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()))
    }
}

fn parse_event_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::field("event_id", "The event id must be an integer"))
}
