//! Text rendering of the catalog and categories for console display.
//!
//! ```text
//! render_products()                  render_categories_with_products()
//! ─────────────────                  ─────────────────────────────────
//! \tProduct: Briefs, ...\n           Underwear\n
//! \tProduct: Boxers, ...\n           \tProduct: Boxers, ...\n
//!                                    \tProduct: Briefs, ...\n
//! render_categories()                Socks\n
//! ───────────────────
//! \tid1 Underwear\n
//! \tid2 Socks\n
//! ```

use crate::prompt::Prompt;
use crate::shop::Shop;

impl<P: Prompt> Shop<P> {
    /// One tab-indented line per catalog product.
    pub fn render_products(&self) -> String {
        self.products()
            .iter()
            .map(|product| format!("\t{}\n", product))
            .collect()
    }

    /// One `id<id> <name>` line per category.
    pub fn render_categories(&self) -> String {
        self.categories()
            .iter()
            .map(|category| format!("\tid{} {}\n", category.id(), category.name()))
            .collect()
    }

    /// Each category name followed by its products in insertion order.
    pub fn render_categories_with_products(&self) -> String {
        let mut out = String::new();
        for category in self.categories() {
            out.push_str(category.name());
            out.push('\n');
            for product in category.products() {
                out.push_str(&format!("\t{}\n", product));
            }
        }
        out
    }
}
