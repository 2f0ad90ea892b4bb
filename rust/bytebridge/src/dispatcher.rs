use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, LazyLock};

use bytes::Bytes;
use parking_lot::RwLock;

use crate::codec::{decode_request, encode_message};
use crate::library_version::library_version;
use crate::protocol::{mw_request, CallParam, CallResp, GetVersionResp, MwResponse};
use crate::{BridgeError, Config, Handler};

static DEFAULT_DISPATCHER: LazyLock<Dispatcher> =
    LazyLock::new(|| Dispatcher::new(Config::from_env()));

/// Decodes request envelopes and routes them to their handlers.
///
/// Version requests are answered by the dispatcher itself. Calls are routed to the [`Handler`]
/// registered under the requested method name.
///
/// A dispatcher is safe to share between threads. Handlers are looked up under a read lock, and
/// invoked after the lock is released, so a slow handler does not block other requests or
/// registrations.
pub struct Dispatcher {
    config: Config,
    handlers: RwLock<HashMap<String, Arc<dyn Handler>>>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers = self.handlers.read();
        let mut methods: Vec<_> = handlers.keys().collect();
        methods.sort();
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("methods", &methods)
            .finish()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Dispatcher {
    /// Creates a dispatcher with no registered handlers.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handlers: RwLock::default(),
        }
    }

    /// Returns the dispatcher used by [`call_api`](crate::call_api) and the C boundary.
    ///
    /// It is configured from the environment the first time it is used.
    pub fn default_instance() -> &'static Dispatcher {
        &DEFAULT_DISPATCHER
    }

    /// The dispatcher's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a handler for `method`.
    ///
    /// Returns an error if the method name is empty, or if a handler is already registered for
    /// it.
    pub fn register(
        &self,
        method: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<(), BridgeError> {
        let method = method.into();
        if method.is_empty() {
            return Err(BridgeError::InvalidMethod);
        }
        let mut handlers = self.handlers.write();
        if handlers.contains_key(&method) {
            return Err(BridgeError::DuplicateMethod(method));
        }
        tracing::debug!("Registered handler for method {method}");
        handlers.insert(method, Arc::new(handler));
        Ok(())
    }

    /// Removes the handler for `method`. Returns false if no handler was registered.
    ///
    /// Calls already in progress on the removed handler run to completion.
    pub fn unregister(&self, method: &str) -> bool {
        let removed = self.handlers.write().remove(method).is_some();
        if removed {
            tracing::debug!("Unregistered handler for method {method}");
        }
        removed
    }

    /// Handles a serialized request and returns the serialized response.
    pub fn handle(&self, input: &[u8]) -> Vec<u8> {
        encode_message(&self.respond(input))
    }

    /// Handles a serialized request and returns the response envelope.
    pub fn respond(&self, input: &[u8]) -> MwResponse {
        self.dispatch(input).unwrap_or_else(MwResponse::from)
    }

    fn dispatch(&self, input: &[u8]) -> Result<MwResponse, BridgeError> {
        let request = decode_request(input, self.config.max_request_len())
            .inspect_err(|e| tracing::debug!("Rejected request of {} bytes: {e}", input.len()))?;
        match request {
            mw_request::Request::ParamGetVersion(_) => Ok(GetVersionResp {
                version: library_version(),
            }
            .into()),
            mw_request::Request::ParamCall(param) => {
                let payload = self.call(param)?;
                Ok(CallResp { payload }.into())
            }
        }
    }

    fn call(&self, param: CallParam) -> Result<Bytes, BridgeError> {
        let CallParam { method, payload } = param;
        let Some(handler) = self.handlers.read().get(&method).cloned() else {
            tracing::warn!("No handler registered for method {method}");
            return Err(BridgeError::UnknownMethod(method));
        };
        match panic::catch_unwind(AssertUnwindSafe(|| handler.call(payload))) {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => {
                tracing::warn!("Handler for method {method} failed: {err}");
                Err(BridgeError::Handler {
                    method,
                    message: err.message().to_string(),
                })
            }
            Err(panic) => {
                tracing::error!(
                    "Handler for method {method} panicked: {}",
                    panic_message(&*panic)
                );
                Err(BridgeError::HandlerPanicked(method))
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
