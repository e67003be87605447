use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, post, put},
};
use std::sync::Arc;

use super::engine::ProfileResolver;
use super::protocol::{
    AckResponse, ENDPOINT_PROFILE, ENDPOINT_PROFILE_BY_ID, ENDPOINT_PUSH, ENDPOINT_REFRESH,
    PushParams, RefreshResponse, ResolveParams, ResolveResponse,
};
use crate::error::ResolveError;
use crate::profile::kind::ProfileKind;
use crate::profile::types::{Profile, ProfileId};

/// Public routes of a node, backed by `resolver`.
pub fn router<P: ProfileKind>(resolver: Arc<ProfileResolver<P>>) -> Router {
    Router::new()
        .route(
            ENDPOINT_PROFILE_BY_ID,
            get(handle_resolve::<P>).delete(handle_uncache::<P>),
        )
        .route(ENDPOINT_PROFILE, put(handle_cache::<P>))
        .route(ENDPOINT_PUSH, post(handle_push::<P>))
        .route(ENDPOINT_REFRESH, post(handle_refresh_all::<P>))
        .layer(Extension(resolver))
}

fn parse_uuid(raw: &str) -> Option<ProfileId> {
    match raw.parse() {
        Ok(uuid) => Some(uuid),
        Err(e) => {
            tracing::error!("Failed to parse uuid '{}': {}", raw, e);
            None
        }
    }
}

pub async fn handle_resolve<P: ProfileKind>(
    Extension(resolver): Extension<Arc<ProfileResolver<P>>>,
    Path(uuid_str): Path<String>,
    Query(params): Query<ResolveParams>,
) -> (StatusCode, Json<ResolveResponse>) {
    let Some(uuid) = parse_uuid(&uuid_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ResolveResponse {
                profile: None,
                error: Some(format!("invalid uuid '{}'", uuid_str)),
            }),
        );
    };

    let allow_store_fallback = params.fallback.unwrap_or(true);

    match resolver.resolve(&uuid, allow_store_fallback).await {
        Ok(Some(profile)) => (
            StatusCode::OK,
            Json(ResolveResponse {
                profile: Some(profile),
                error: None,
            }),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ResolveResponse {
                profile: None,
                error: None,
            }),
        ),
        Err(e) => {
            let status = match &e {
                ResolveError::RemoteUnavailable { .. } => StatusCode::BAD_GATEWAY,
                ResolveError::StoreUnavailable(_) | ResolveError::DirectoryUnavailable(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
            };
            (
                status,
                Json(ResolveResponse {
                    profile: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_cache<P: ProfileKind>(
    Extension(resolver): Extension<Arc<ProfileResolver<P>>>,
    Json(profile): Json<Profile>,
) -> (StatusCode, Json<AckResponse>) {
    resolver.cache(profile);
    (StatusCode::OK, Json(AckResponse { success: true }))
}

pub async fn handle_uncache<P: ProfileKind>(
    Extension(resolver): Extension<Arc<ProfileResolver<P>>>,
    Path(uuid_str): Path<String>,
) -> (StatusCode, Json<AckResponse>) {
    let Some(uuid) = parse_uuid(&uuid_str) else {
        return (StatusCode::BAD_REQUEST, Json(AckResponse { success: false }));
    };

    let removed = resolver.uncache(&uuid).is_some();
    (StatusCode::OK, Json(AckResponse { success: removed }))
}

pub async fn handle_push<P: ProfileKind>(
    Extension(resolver): Extension<Arc<ProfileResolver<P>>>,
    Path(uuid_str): Path<String>,
    Query(params): Query<PushParams>,
) -> (StatusCode, Json<AckResponse>) {
    let Some(uuid) = parse_uuid(&uuid_str) else {
        return (StatusCode::BAD_REQUEST, Json(AckResponse { success: false }));
    };

    let Some(profile) = resolver.get(&uuid) else {
        return (StatusCode::NOT_FOUND, Json(AckResponse { success: false }));
    };

    match resolver.push(&profile, params.uncache.unwrap_or(false)).await {
        Ok(()) => (StatusCode::OK, Json(AckResponse { success: true })),
        Err(e) => {
            tracing::error!("Failed to push {}: {}", uuid, e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(AckResponse { success: false }),
            )
        }
    }
}

pub async fn handle_refresh_all<P: ProfileKind>(
    Extension(resolver): Extension<Arc<ProfileResolver<P>>>,
) -> Json<RefreshResponse> {
    Json(RefreshResponse {
        updated: resolver.refresh_all(),
    })
}
