//! Trace Context - request correlation and structured logging

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{info, info_span, warn, Span};

/// Global request counter for trace ID generation
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Short, unique trace ID: 6 hex characters (e.g., "a1b2c3")
pub fn generate_trace_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);

    let mixed = counter.wrapping_add(timestamp);
    format!("{:06x}", mixed & 0xFFFFFF)
}

/// Correlation data for a single MCP request
#[derive(Debug, Clone)]
pub struct TraceContext {
    pub trace_id: String,
    /// MCP method (e.g., "tools/call", "resources/read")
    pub method: &'static str,
    /// Tool name or resource URI
    pub target: String,
    pub started_at: Instant,
}

impl TraceContext {
    pub fn new(method: &'static str, target: impl Into<String>) -> Self {
        Self {
            trace_id: generate_trace_id(),
            method,
            target: target.into(),
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}

/// Request span builder for structured logging
pub struct RequestSpan;

impl RequestSpan {
    /// Span carrying the trace id into every child log line
    pub fn enter(ctx: &TraceContext) -> Span {
        info_span!(
            "request",
            trace_id = %ctx.trace_id,
            method = %ctx.method,
        )
    }

    pub fn log_entry(ctx: &TraceContext) {
        info!(trace_id = %ctx.trace_id, "→ {} {}", ctx.method, ctx.target);
    }

    /// Completion line; failures are logged at WARN
    pub fn log_exit(ctx: &TraceContext, outcome: Result<(), &str>) {
        let elapsed = ctx.elapsed_ms();

        match outcome {
            Ok(()) => info!(
                trace_id = %ctx.trace_id,
                "← {} ok ({}ms)",
                ctx.target,
                elapsed
            ),
            Err(reason) => warn!(
                trace_id = %ctx.trace_id,
                "← {} failed: {} ({}ms)",
                ctx.target,
                reason,
                elapsed
            ),
        }
    }
}
