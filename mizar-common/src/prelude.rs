#[rustfmt::skip]
pub use crate::exception::{ErrorCode, MizResult};
pub use crate::{fmt_err, str_err};

#[rustfmt::skip]
// std
pub use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
pub use std::sync::Arc;
pub use std::time::{Duration, Instant};

#[rustfmt::skip]
pub type InlineStr = smartstring::SmartString<smartstring::Compact>;
pub use once_cell::sync::{Lazy, OnceCell};
pub use parking_lot::{Condvar, Mutex, RwLock};

#[rustfmt::skip]
pub use log::{debug, error, info, log_enabled, trace, warn, LevelFilter};
