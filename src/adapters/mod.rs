//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements             | Connects to           |
//! |------------|------------------------|-----------------------|
//! | `log_sink` | EventSink, FaultSink   | `log` facade          |
//! | `script`   | InputPort              | Any `BufRead` source  |

pub mod log_sink;
pub mod script;
