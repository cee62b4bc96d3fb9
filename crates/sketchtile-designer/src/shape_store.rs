use crate::model::{Bounds, Curve, DesignerShape};

/// Append-only registry of finalized curves, kept in draw order.
///
/// `ShapeStore` is responsible for:
/// - Assigning each inserted curve a unique, increasing id
/// - Preserving insertion order, which is also the draw order
/// - Answering the combined bounds of everything drawn so far
///
/// There is no removal: curves live until the store is dropped.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    curves: Vec<Curve>,
    next_id: u64,
}

impl ShapeStore {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// use sketchtile_designer::shape_store::ShapeStore;
    ///
    /// let store = ShapeStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            curves: Vec::new(),
            next_id: 1,
        }
    }

    /// Inserts a curve at the end of the draw order and returns its id.
    pub fn add(&mut self, mut curve: Curve) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        curve.id = id;
        self.curves.push(curve);
        id
    }

    /// All curves in draw order.
    pub fn list(&self) -> &[Curve] {
        &self.curves
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Curve> {
        self.curves.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Union of all curve bounds, `None` when nothing has been drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        self.curves
            .iter()
            .filter_map(|c| c.bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
