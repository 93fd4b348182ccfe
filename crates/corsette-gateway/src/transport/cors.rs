//! CORS request hook.
//!
//! Responsibilities:
//! - Evaluate each request's `Origin` + method against the compiled policy
//! - Trusted preflight: answer 204 directly, downstream is never called
//! - Trusted actual request: run downstream, then add grant headers
//! - Missing or untrusted origin: run downstream, add nothing

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{ORIGIN, VARY},
        HeaderMap, HeaderName, HeaderValue, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use corsette_core::{CorsDecision, CorsPolicy};

/// Wrap every route of `router` with the CORS hook.
pub fn attach<S>(router: Router<S>, policy: Arc<CorsPolicy>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(policy, apply_cors))
}

pub async fn apply_cors(
    State(policy): State<Arc<CorsPolicy>>,
    req: Request,
    next: Next,
) -> Response {
    let decision = policy.evaluate(
        req.headers().get(ORIGIN).map(HeaderValue::as_bytes),
        req.method().as_str(),
    );

    match decision {
        CorsDecision::PassThrough => next.run(req).await,
        CorsDecision::Withhold => {
            tracing::debug!(
                origin = ?req.headers().get(ORIGIN),
                method = %req.method(),
                path = %req.uri().path(),
                "cors grant withheld for untrusted origin"
            );
            next.run(req).await
        }
        CorsDecision::Preflight => {
            let mut res = StatusCode::NO_CONTENT.into_response();
            write_grant(&policy, decision, res.headers_mut());
            res
        }
        CorsDecision::Actual => {
            let mut res = next.run(req).await;
            write_grant(&policy, decision, res.headers_mut());
            res
        }
    }
}

fn write_grant(policy: &CorsPolicy, decision: CorsDecision, headers: &mut HeaderMap) {
    for (name, value) in policy.response_headers(decision) {
        let name = HeaderName::from_static(name);
        let value = match HeaderValue::from_bytes(value.as_bytes()) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(header = %name, error = %e, "cors header value not encodable; skipped");
                continue;
            }
        };

        // Downstream may already vary on other headers.
        if name == VARY {
            headers.append(name, value);
        } else {
            headers.insert(name, value);
        }
    }
}
