use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};

use crate::{
    http::handlers::{
        leaderboard::get_leaderboard_handler,
        reservation::{
            cancel_reservation_handler, create_reservation_handler, get_my_reservations_handler,
        },
        round::submit_round_handler,
        schedule::{generate_schedule_handler, get_template_handler, put_template_handler},
        season::{
            activate_season_handler, add_season_handler, delete_season_handler,
            get_active_season_handler, get_seasons_handler,
        },
        tee_time::{
            create_tee_time_handler, get_availability_handler, get_season_tee_times_handler,
            set_tee_time_availability_handler,
        },
    },
    middleware::{create_booking_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let booking_rate_limiter = create_booking_rate_limiter();

    let booking_routes = Router::new()
        .route("/reservations", post(create_reservation_handler))
        .route("/reservations/{reservation_id}", delete(cancel_reservation_handler))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(booking_rate_limiter.clone(), req, next)
        }));

    Router::new()
        .route("/season", get(get_seasons_handler).post(add_season_handler))
        .route("/season/active", get(get_active_season_handler))
        .route("/season/{season_id}", delete(delete_season_handler))
        .route("/season/{season_id}/activate", put(activate_season_handler))
        .route(
            "/season/{season_id}/template",
            get(get_template_handler).put(put_template_handler),
        )
        .route("/season/{season_id}/schedule", post(generate_schedule_handler))
        .route("/season/{season_id}/tee-times", get(get_season_tee_times_handler))
        .route(
            "/tee-times",
            get(get_availability_handler).post(create_tee_time_handler),
        )
        .route(
            "/tee-times/{tee_time_id}/availability",
            patch(set_tee_time_availability_handler),
        )
        .route("/reservations/me", get(get_my_reservations_handler))
        .merge(booking_routes)
        .route("/rounds", post(submit_round_handler))
        .route("/leaderboard", get(get_leaderboard_handler))
        .with_state(state)
}
