//! Shopping list built from the recipes in a user's cart.
//!
//! Ingredient amounts are summed per (name, measurement unit) across all carted recipes
//! and rendered as a downloadable text or PDF file.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::recipe::RecipeRepository,
    error::{internal::InternalError, AppError},
    model::shopping_list::{ShoppingListFormat, ShoppingListItem},
    util::pdf::{TextDocument, TextLine},
};

pub const LIST_TITLE: &str = "Shopping list";
pub const ITEMS_PER_PDF_PAGE: usize = 30;

const EMPTY_LIST_MESSAGE: &str = "Your shopping cart is empty.";

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregated ingredients of every recipe in the user's shopping cart.
    pub async fn build(&self, user_id: i32) -> Result<Vec<ShoppingListItem>, AppError> {
        let rows = RecipeRepository::new(self.db)
            .get_shopping_cart_ingredients(user_id)
            .await?;

        Ok(aggregate(rows))
    }

    /// Builds and renders the user's shopping list in the requested format.
    pub async fn export(
        &self,
        user_id: i32,
        format: ShoppingListFormat,
    ) -> Result<Vec<u8>, AppError> {
        let items = self.build(user_id).await?;

        tracing::debug!(
            "Exporting shopping list of user {} with {} items as {:?}",
            user_id,
            items.len(),
            format
        );

        Ok(match format {
            ShoppingListFormat::Text => render_text(&items).into_bytes(),
            ShoppingListFormat::Pdf => render_pdf(&items)?,
        })
    }
}

/// Sums amounts per (name, unit) and sorts the result by name.
pub fn aggregate(rows: Vec<(String, String, i32)>) -> Vec<ShoppingListItem> {
    let mut totals: BTreeMap<(String, String), i64> = BTreeMap::new();
    for (name, measurement_unit, amount) in rows {
        *totals.entry((name, measurement_unit)).or_default() += i64::from(amount);
    }

    let mut items: Vec<ShoppingListItem> = totals
        .into_iter()
        .map(|((name, measurement_unit), amount)| ShoppingListItem {
            name: capitalize(&name),
            measurement_unit,
            amount,
        })
        .collect();
    items.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
    });

    items
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn format_item(index: usize, item: &ShoppingListItem) -> String {
    format!(
        "{}. {} ({}) - {}",
        index + 1,
        item.name,
        item.measurement_unit,
        item.amount
    )
}

pub fn render_text(items: &[ShoppingListItem]) -> String {
    let mut out = format!("{}\n\n", LIST_TITLE);

    if items.is_empty() {
        out.push_str(EMPTY_LIST_MESSAGE);
        out.push('\n');
        return out;
    }

    for (index, item) in items.iter().enumerate() {
        out.push_str(&format_item(index, item));
        out.push('\n');
    }

    out
}

/// Renders the list as A4 pages of `ITEMS_PER_PDF_PAGE` items, each page with a header.
pub fn render_pdf(items: &[ShoppingListItem]) -> Result<Vec<u8>, InternalError> {
    layout_pdf(items).render()
}

/// Lays the list out on pages; positions are in millimetres.
pub fn layout_pdf(items: &[ShoppingListItem]) -> TextDocument {
    const LEFT: f32 = 25.0;
    const TITLE_Y: f32 = 275.0;
    const FIRST_ITEM_Y: f32 = 262.0;
    const LINE_HEIGHT: f32 = 7.8;

    let mut document = TextDocument::new(LIST_TITLE);

    if items.is_empty() {
        document.add_page(vec![
            TextLine::new(LEFT, TITLE_Y, 18.0, LIST_TITLE),
            TextLine::new(LEFT, FIRST_ITEM_Y, 12.0, EMPTY_LIST_MESSAGE),
        ]);
        return document;
    }

    let page_count = items.len().div_ceil(ITEMS_PER_PDF_PAGE);
    for (page, chunk) in items.chunks(ITEMS_PER_PDF_PAGE).enumerate() {
        let mut lines = vec![TextLine::new(
            LEFT,
            TITLE_Y,
            18.0,
            format!("{} ({}/{})", LIST_TITLE, page + 1, page_count),
        )];

        for (offset, item) in chunk.iter().enumerate() {
            let index = page * ITEMS_PER_PDF_PAGE + offset;
            let y = FIRST_ITEM_Y - LINE_HEIGHT * offset as f32;
            lines.push(TextLine::new(LEFT, y, 12.0, format_item(index, item)));
        }

        document.add_page(lines);
    }

    document
}
