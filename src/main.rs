use tracing::{error, info, warn, Instrument};

use product_inventory::app_system::{setup_tracing, InventorySystem};
use product_inventory::config::{InventoryConfig, CONFIG_PATH_ENV};
use product_inventory::domain::Field;
use product_inventory::error::ScreenError;
use product_inventory::query::SortKey;
use product_inventory::screens::Decision;

fn load_config() -> InventoryConfig {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => match InventoryConfig::load(&path) {
            Ok(config) => {
                info!(path = %path, "Loaded configuration");
                config
            }
            Err(e) => {
                warn!(error = %e, "Falling back to default configuration");
                InventoryConfig::default()
            }
        },
        Err(_) => InventoryConfig::default(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = load_config();
    let format = config.display.clone();
    let system = InventorySystem::new(config);

    // Create: one rejected draft, then three valid products
    let span = tracing::info_span!("create_products");
    async {
        let mut form = system.create_screen();
        form.edit(Field::Name, " ");
        form.edit(Field::Price, "0");
        if let Err(ScreenError::Invalid(errors)) = form.submit().await {
            info!(errors = %errors, "Form blocked as expected");
        }

        for (name, price, stock) in [("Keyboard", "45.50", "7"), ("Monitor", "199.99", "0"), ("Mouse", "19.90", "30")] {
            form.edit(Field::Name, name);
            form.edit(Field::Price, price);
            form.edit(Field::Stock, stock);
            form.submit().await?;
        }
        Ok::<_, ScreenError>(())
    }
    .instrument(span)
    .await?;

    // List: search and sort
    let mut list = system.list_screen();
    list.refresh().await?;
    list.sort_by(SortKey::Price);
    list.toggle_order();
    for product in list.visible() {
        info!(
            code = product.code,
            name = %product.name,
            price = %format.price(product.price),
            status = list.stock_status(&product).label(),
            "Row"
        );
    }
    let summary = list.summary();
    info!(
        total = summary.total,
        available = summary.available,
        low = summary.low,
        out_of_stock = summary.out_of_stock,
        "Inventory summary"
    );

    // Edit: restock the monitor
    let span = tracing::info_span!("edit_product");
    async {
        let mut edit = system.edit_screen(2).await?;
        edit.edit(Field::Stock, "12");
        for change in edit.changes(&format) {
            info!(field = %change.field, old = %change.old_display, new = %change.new_display, "Pending change");
        }
        if edit.can_save() {
            edit.submit().await?;
        }
        Ok::<_, ScreenError>(())
    }
    .instrument(span)
    .await?;

    // Delete: decline once, then confirm
    let prompt = list.request_delete(1)?;
    info!(prompt = %prompt.message(), "Asking for confirmation");
    list.resolve_delete(prompt.clone(), Decision::Declined).await?;
    match list.resolve_delete(prompt, Decision::Confirmed).await {
        Ok(outcome) => info!(?outcome, remaining = list.products().len(), "Delete finished"),
        Err(e) => error!(error = %e, "Delete failed"),
    }

    drop(list);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
