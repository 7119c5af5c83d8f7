use crate::domain::Product;

/// Product catalog: card list plus an optional open detail.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    cursor: usize,
    detail: Option<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            cursor: 0,
            detail: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move by `delta` cards, clamped to the catalog.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.products.is_empty() {
            return;
        }
        let last = self.products.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn open_cursor(&mut self) -> bool {
        let Some(product) = self.products.get(self.cursor).cloned() else {
            return false;
        };
        self.detail = Some(product);
        true
    }

    pub fn detail(&self) -> Option<&Product> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fixtures;

    #[test]
    fn test_cursor_clamps() {
        let mut catalog = ProductCatalog::new(Fixtures::builtin().products);
        catalog.move_cursor(-3);
        assert_eq!(catalog.cursor(), 0);
        catalog.move_cursor(100);
        assert_eq!(catalog.cursor(), catalog.products().len() - 1);
    }

    #[test]
    fn test_empty_catalog_opens_nothing() {
        let mut catalog = ProductCatalog::default();
        catalog.move_cursor(1);
        assert!(!catalog.open_cursor());
        assert!(catalog.detail().is_none());
    }
}
