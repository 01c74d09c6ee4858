//! Request correlation for tool calls and resource reads
//!
//! Every request gets a short trace id, a tracing span, and one entry and
//! one exit line.

mod trace_context;

pub use trace_context::{generate_trace_id, RequestSpan, TraceContext};
