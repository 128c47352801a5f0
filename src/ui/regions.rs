use ratatui::layout::Rect;

/// Screen areas of the elements drawn in the last frame, addressable by id.
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    entries: Vec<(String, Rect)>,
}

impl RegionMap {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Re-registering an id replaces its previous area.
    pub fn register(&mut self, id: impl Into<String>, area: Rect) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = area,
            None => self.entries.push((id, area)),
        }
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, area)| *area)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}
