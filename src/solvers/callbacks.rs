/*!
Callbacks associated with a solve.

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.

# Callback types
- [CallbackTerminate] is called periodically during a solve, and the solve ends with an unknown result if the callback returns true.
- [CallbackProgress] is called with the counters of a solve, at most once each [progress interval](crate::config::Config::progress_interval).
*/

use super::Counters;

pub type CallbackTerminate = dyn FnMut() -> bool;

pub type CallbackProgress = dyn FnMut(&Counters);
