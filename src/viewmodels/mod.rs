//! View models - One owned state container per screen.
//!
//! Each view model exposes [`Store`](crate::state::Store) fields the rendering
//! layer reads or subscribes to, and `on_*` event methods it calls. Events run
//! synchronously and recompute derived state before returning; only login
//! submission awaits.

/// Shopping cart screen
pub mod cart;
/// Product detail screen with quantity selector
pub mod detail;
/// Login form
pub mod login;
/// Registration form
pub mod registration;
/// Store screen: search, category chips and the filtered product list
pub mod store;

pub use cart::CartViewModel;
pub use detail::ProductDetailViewModel;
pub use login::{Authenticator, DemoAuthenticator, LoginViewModel};
pub use registration::RegistrationViewModel;
pub use store::StoreViewModel;

use crate::{
    core::form::{FieldEvent, FieldState},
    state::Store,
};

/// Runs a field event through the reducer and publishes the result.
pub(crate) fn dispatch(field: &Store<FieldState>, event: FieldEvent) {
    field.update(|state| *state = std::mem::take(state).reduce(event));
}
