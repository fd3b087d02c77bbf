use dotenvy::dotenv;
use petlife::{
    config::{
        catalog::{DEFAULT_CONFIG_PATH, load_catalog_or_builtin},
        login::LoginSettings,
    },
    core::{catalog::Catalog, form::FormStatus},
    errors::Result,
    viewmodels::{
        CartViewModel, DemoAuthenticator, LoginViewModel, ProductDetailViewModel,
        RegistrationViewModel, StoreViewModel,
    },
};
use std::{env, sync::Arc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Build the catalog once and share it read-only
    let config_path = env::var("PETLIFE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let catalog = load_catalog_or_builtin(&config_path)
        .map(Arc::new)
        .inspect(|c| info!("Catalog ready with {} products.", c.products().len()))
        .inspect_err(|e| error!("Failed to load catalog from {}: {}", config_path, e))?;

    // 4. Demo login settings
    let login_settings = LoginSettings::from_env()
        .inspect_err(|e| error!("Invalid login settings: {}", e))?;

    // 5. Walk one shopping session
    run_demo_session(&catalog, login_settings).await;

    Ok(())
}

async fn run_demo_session(catalog: &Arc<Catalog>, login_settings: LoginSettings) {
    let demo_email = login_settings.email.clone();
    let demo_password = login_settings.password.clone();

    let login = LoginViewModel::new(DemoAuthenticator::new(login_settings));
    login.on_email_changed("not-an-email");
    login.on_password_changed("123");
    login.on_login_clicked().await;
    warn!(
        email = %login.email().get().error_message,
        password = %login.password().get().error_message,
        "Login form rejected"
    );

    login.on_email_changed(&demo_email);
    login.on_password_changed(&demo_password);
    login.on_login_clicked().await;
    if login.status().get() == FormStatus::Success {
        info!("Logged in as {}", demo_email);
        login.reset_login_state();
    }

    let registration = RegistrationViewModel::new();
    registration.on_name_changed("Ana");
    registration.on_email_changed("ana@pet.cl");
    registration.on_password_changed("whiskers99");
    registration.on_confirm_password_changed("whiskers99");
    registration.on_register_clicked();
    info!("Registration status: {:?}", registration.status().get());
    registration.reset_registration_state();

    let store = StoreViewModel::new(Arc::clone(catalog));
    let categories: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    info!("Categories: {}", categories.join(", "));

    store.on_category_selected("Food");
    store.on_search_query_changed("kibble");
    for product in store.filtered() {
        info!("Found #{} {} at ${:.2}", product.id, product.name, product.price);
    }

    let cart = CartViewModel::new();
    if let Some(first) = store.filtered().first() {
        let detail = ProductDetailViewModel::new(catalog, first.id);
        detail.on_quantity_change(2);
        if let Some(line_total) = detail.line_total() {
            info!("Detail line total: ${:.2}", line_total);
        }
        match detail.add_to_cart(&cart) {
            Some(units) => info!("Added {} x{} from the detail screen", first.name, units),
            None => warn!("Detail screen added nothing to the cart"),
        }
    }

    let unknown = ProductDetailViewModel::new(catalog, 999);
    if unknown.product().is_none() {
        info!("Product 999 has nothing to display");
    }

    if let Some(ball) = catalog.product_by_id(2) {
        let added = cart.add_to_cart(&ball, 1);
        info!("Ball added: {}", added);
    }
    cart.change_quantity(2, 3);

    for entry in cart.cart().get().entries() {
        info!(
            "{} x{} = ${:.2}",
            entry.product.name,
            entry.quantity,
            entry.line_total()
        );
    }
    info!("Cart total: ${:.2}", cart.total_price());

    cart.change_quantity(2, 0);
    info!("After removing the ball: ${:.2}", cart.total_price());

    cart.clear();
    info!("Session finished, cart empty: {}", cart.is_empty());
}
