use std::collections::HashSet;

use egui::{Rect, Vec2};

use crate::element::{Element, ElementType, ItemRecord};

/// Identifier of an item on one canvas. Ids are never reused, so an id that
/// was erased stays dead even after new items are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

/// Ordered display list. Position in the list is the z-order: later items
/// paint on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    elements: Vec<(ElementId, ElementType)>,
    next_id: u64,
    viewport: Vec2,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas whose visible area is `viewport` pixels large
    pub fn with_viewport(viewport: Vec2) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Record the current size of the visible drawing area
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Items bottom to top
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &ElementType)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementType> {
        self.elements.iter().map(|(_, element)| element)
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementType> {
        self.index_of(id).map(|index| &self.elements[index].1)
    }

    /// Add an item on top of everything else
    pub fn append(&mut self, element: ElementType) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push((id, element));
        id
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Ids of every item whose bounding box touches `rect`, bottom to top
    pub fn find_overlapping(&self, rect: Rect) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, element)| element.rect().intersects(rect))
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn remove(&mut self, id: ElementId) -> Option<ElementType> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index).1)
    }

    /// Remove every listed item, returning how many were actually present
    pub fn remove_all(&mut self, ids: &[ElementId]) -> usize {
        let before = self.elements.len();
        self.elements.retain(|(id, _)| !ids.contains(id));
        before - self.elements.len()
    }

    /// Move an item below all others. Returns false for unknown ids.
    pub fn sink_to_back(&mut self, id: ElementId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let entry = self.elements.remove(index);
                self.elements.insert(0, entry);
                true
            }
            None => false,
        }
    }

    /// Rough share of the viewport covered by drawing, in percent.
    ///
    /// Adds up each item's bounding box clamped to the viewport. Overlapping
    /// boxes are counted once per item, so this overestimates; only boxes
    /// that are exactly identical after clamping are counted once. The
    /// result is capped at 100.
    pub fn bounding_box_area_estimate(&self) -> f32 {
        let (width, height) = (self.viewport.x, self.viewport.y);
        if self.elements.is_empty() || width <= 1.0 || height <= 1.0 {
            return 0.0;
        }

        let mut seen = HashSet::new();
        let mut total_area = 0.0_f64;

        for (_, element) in &self.elements {
            let rect = element.rect();
            let x1 = rect.min.x.max(0.0);
            let y1 = rect.min.y.max(0.0);
            let x2 = rect.max.x.min(width);
            let y2 = rect.max.y.min(height);

            if !seen.insert([x1.to_bits(), y1.to_bits(), x2.to_bits(), y2.to_bits()]) {
                continue;
            }

            let w = (x2 - x1).max(0.0) as f64;
            let h = (y2 - y1).max(0.0) as f64;
            total_area += w * h;
        }

        let percentage = total_area / (width as f64 * height as f64) * 100.0;
        percentage.min(100.0) as f32
    }

    /// Detached plain records of every item, bottom to top
    pub fn serialize(&self) -> Vec<ItemRecord> {
        self.elements.iter().map(|(_, element)| element.to_record()).collect()
    }

    /// Replace the whole canvas with the given records.
    ///
    /// Unknown item types are skipped silently, records that fail validation
    /// are skipped with a warning. Returns the number of items created.
    pub fn deserialize(&mut self, records: &[ItemRecord]) -> usize {
        self.elements.clear();

        for record in records {
            match ElementType::from_record(record) {
                Ok(Some(element)) => {
                    self.append(element);
                }
                Ok(None) => {}
                Err(err) => log::warn!("Skipping invalid {} item: {}", record.type_name(), err),
            }
        }

        self.elements.len()
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|(element_id, _)| *element_id == id)
    }
}
