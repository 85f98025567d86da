//! The bounded producer/consumer pipeline between frame computation and
//! frame display.
//!
//! # Architecture
//!
//! - **Input**: `FractalFrame` requests admitted through `ViewPipeline::submit`
//! - **Dispatch**: a single dispatcher thread drains the computation queue,
//!   rasterizes each frame across the worker pool, and feeds the display queue
//! - **Output**: completed frames drained in submission order via
//!   `poll_completed`/`take_completed`
//!
//! Both queues are bounded, so a producer that outruns the consumer blocks
//! instead of buffering without limit. A pending-frame counter spans both
//! stages and drives the progress and zooming-in-progress signals.

pub mod bounded_queue;
pub mod view_pipeline;
