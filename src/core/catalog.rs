//! Lookup tables: work types and storage places.

use crate::core::ids::next_id_for;
use crate::errors::{AppError, AppResult};
use crate::models::storage_place::StoragePlace;
use crate::models::work_type::WorkType;
use crate::sheet::SheetBackend;
use crate::store::{Session, TableKind};

fn required_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidValue("name must not be empty".into()));
    }
    Ok(name.to_string())
}

pub struct CatalogLogic;

impl CatalogLogic {
    pub fn add_work_type<B: SheetBackend>(
        session: &mut Session<B>,
        name: &str,
    ) -> AppResult<WorkType> {
        let name = required_name(name)?;
        let mut table = session.load_owned(TableKind::WorkTypes)?;

        let work_type = WorkType {
            id: next_id_for(&table)?,
            name,
        };
        table.append(&work_type);
        session.save(table)?;
        Ok(work_type)
    }

    pub fn work_types<B: SheetBackend>(session: &mut Session<B>) -> AppResult<Vec<WorkType>> {
        session.load(TableKind::WorkTypes)?.decode_all()
    }

    pub fn add_place<B: SheetBackend>(
        session: &mut Session<B>,
        name: &str,
    ) -> AppResult<StoragePlace> {
        let name = required_name(name)?;
        let mut table = session.load_owned(TableKind::StoragePlaces)?;

        let place = StoragePlace {
            id: next_id_for(&table)?,
            name,
        };
        table.append(&place);
        session.save(table)?;
        Ok(place)
    }

    pub fn places<B: SheetBackend>(session: &mut Session<B>) -> AppResult<Vec<StoragePlace>> {
        session.load(TableKind::StoragePlaces)?.decode_all()
    }
}
