//! Single-origin CORS policy.
//!
//! A [`CorsPolicy`] is compiled once at startup from the trusted frontend
//! origin and then evaluated per request. Evaluation is a handful of byte
//! comparisons over immutable data, so the policy can be shared behind an
//! `Arc` without locking.
//!
//! Rules:
//! - no `Origin` header: the request is same-origin, nothing is added.
//! - `Origin` equal (byte for byte) to the frontend URL: granted. `OPTIONS`
//!   is answered directly as a preflight, anything else is forwarded and
//!   decorated.
//! - any other `Origin`: forwarded untouched. The browser blocks the read on
//!   its own because no grant headers are present.

/// Request headers a granted cross-origin request may carry.
pub const ALLOWED_HEADERS: [&str; 4] = ["Origin", "Content-Type", "Authorization", "X-API-Key"];

/// Methods advertised to browsers. Not configurable.
pub const ALLOWED_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Preflight cache lifetime advertised via `Access-Control-Max-Age` (12h).
pub const MAX_AGE_SECS: u64 = 12 * 60 * 60;

const PREFLIGHT_METHOD: &[u8] = b"OPTIONS";
const PREFLIGHT_VARY: &str = "Origin, Access-Control-Request-Method, Access-Control-Request-Headers";

/// Response header names (lowercase, as stored by `http::HeaderMap`).
pub mod header {
    pub const ALLOW_ORIGIN: &str = "access-control-allow-origin";
    pub const ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
    pub const ALLOW_HEADERS: &str = "access-control-allow-headers";
    pub const ALLOW_METHODS: &str = "access-control-allow-methods";
    pub const MAX_AGE: &str = "access-control-max-age";
    pub const VARY: &str = "vary";
}

/// Outcome of evaluating one request against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsDecision {
    /// No `Origin` header. Forward unmodified.
    PassThrough,
    /// Untrusted origin. Forward without any CORS headers.
    Withhold,
    /// Trusted `OPTIONS` request. Answer with an empty 204, skip downstream.
    Preflight,
    /// Trusted non-preflight request. Forward, then add grant headers.
    Actual,
}

impl CorsDecision {
    pub fn is_granted(self) -> bool {
        matches!(self, CorsDecision::Preflight | CorsDecision::Actual)
    }

    pub fn short_circuits(self) -> bool {
        matches!(self, CorsDecision::Preflight)
    }
}

/// Compiled, immutable CORS policy for exactly one trusted origin.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origin: String,
    allow_credentials: bool,
    allowed_headers: &'static [&'static str],
    allowed_methods: &'static [&'static str],

    // Pre-joined header values, built once.
    allow_headers_value: String,
    allow_methods_value: String,
    max_age_value: String,
}

/// Build the policy for a single trusted frontend origin.
///
/// The value is not validated. Something that can never equal a browser
/// `Origin` (empty, trailing slash) is accepted and simply never grants.
pub fn build_cors_policy(frontend_url: impl Into<String>) -> CorsPolicy {
    CorsPolicy::new(frontend_url.into())
}

impl CorsPolicy {
    pub fn new(frontend_url: String) -> Self {
        if frontend_url.is_empty() || frontend_url.ends_with('/') {
            tracing::warn!(
                frontend_url = %frontend_url,
                "frontend_url can never match a browser Origin; all cross-origin requests will be withheld"
            );
        }

        Self {
            allowed_origin: frontend_url,
            allow_credentials: true,
            allowed_headers: &ALLOWED_HEADERS,
            allowed_methods: &ALLOWED_METHODS,
            allow_headers_value: ALLOWED_HEADERS.join(", "),
            allow_methods_value: ALLOWED_METHODS.join(", "),
            max_age_value: MAX_AGE_SECS.to_string(),
        }
    }

    /// Always exactly one entry: the configured frontend URL.
    pub fn allowed_origins(&self) -> &[String] {
        std::slice::from_ref(&self.allowed_origin)
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn allowed_headers(&self) -> &[&'static str] {
        self.allowed_headers
    }

    pub fn allowed_methods(&self) -> &[&'static str] {
        self.allowed_methods
    }

    /// Exact, case-sensitive match. An empty `Origin` never matches.
    pub fn is_origin_allowed(&self, origin: &[u8]) -> bool {
        !origin.is_empty() && origin == self.allowed_origin.as_bytes()
    }

    /// Decide how to treat a request given its raw `Origin` header and method.
    pub fn evaluate(&self, origin: Option<&[u8]>, method: &str) -> CorsDecision {
        let Some(origin) = origin else {
            return CorsDecision::PassThrough;
        };
        if !self.is_origin_allowed(origin) {
            return CorsDecision::Withhold;
        }
        if method.as_bytes() == PREFLIGHT_METHOD {
            CorsDecision::Preflight
        } else {
            CorsDecision::Actual
        }
    }

    /// Headers to set on the response for `decision`. Empty unless granted.
    pub fn response_headers(&self, decision: CorsDecision) -> Vec<(&'static str, &str)> {
        if !decision.is_granted() {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(6);
        out.push((header::ALLOW_ORIGIN, self.allowed_origin.as_str()));
        if self.allow_credentials {
            out.push((header::ALLOW_CREDENTIALS, "true"));
        }
        out.push((header::ALLOW_HEADERS, self.allow_headers_value.as_str()));
        out.push((header::ALLOW_METHODS, self.allow_methods_value.as_str()));

        match decision {
            CorsDecision::Preflight => {
                out.push((header::MAX_AGE, self.max_age_value.as_str()));
                out.push((header::VARY, PREFLIGHT_VARY));
            }
            _ => out.push((header::VARY, "Origin")),
        }
        out
    }
}
