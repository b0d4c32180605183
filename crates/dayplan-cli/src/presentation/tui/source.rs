use dayplan_engine::RowSource;
use dayplan_store::DayStore;
use dayplan_types::{DateKey, DayRecord};

use crate::presentation::tile::DayTile;

/// Builds day tiles from stored records
pub struct TileSource<S> {
    store: S,
}

impl<S: DayStore> TileSource<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `record` for `date` and build the tile for what was stored
    pub fn save(&mut self, date: DateKey, record: DayRecord) -> dayplan_store::Result<DayTile> {
        self.store.set(date, record)?;
        self.materialize(date)
    }
}

impl<S: DayStore> RowSource for TileSource<S> {
    type Row = DayTile;
    type Error = dayplan_store::Error;

    fn materialize(&mut self, date: DateKey) -> Result<DayTile, Self::Error> {
        let record = self.store.get(date)?;
        Ok(DayTile::new(date, record))
    }
}
