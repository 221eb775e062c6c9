// src/db/properties.rs
use crate::domain::property::{HistoryEntry, Property, PropertyDetail, PropertyKind};
use crate::errors::{CatalogError, ServerError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const PROPERTY_COLUMNS: &str = r#"
    id, title, address, kind, price, bedrooms, bathrooms, area, image, is_verified, listed_on
"#;

/// Raw row as stored. Integers come back signed; `into_property` narrows them.
struct PropertyRow {
    id: String,
    title: String,
    address: String,
    kind: String,
    price: i64,
    bedrooms: i64,
    bathrooms: f64,
    area: i64,
    image: String,
    is_verified: bool,
    listed_on: NaiveDate,
}

impl PropertyRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PropertyRow {
            id: row.get(0)?,
            title: row.get(1)?,
            address: row.get(2)?,
            kind: row.get(3)?,
            price: row.get(4)?,
            bedrooms: row.get(5)?,
            bathrooms: row.get(6)?,
            area: row.get(7)?,
            image: row.get(8)?,
            is_verified: row.get(9)?,
            listed_on: row.get(10)?,
        })
    }

    fn into_property(self) -> Result<Property, CatalogError> {
        let invalid = |field: &'static str| CatalogError::InvalidField {
            id: self.id.clone(),
            field,
        };

        let kind = PropertyKind::parse(&self.kind).ok_or_else(|| invalid("kind"))?;
        let price = u64::try_from(self.price).map_err(|_| invalid("price"))?;
        let bedrooms = u32::try_from(self.bedrooms).map_err(|_| invalid("bedrooms"))?;
        let area = u32::try_from(self.area).map_err(|_| invalid("area"))?;

        Ok(Property {
            id: self.id,
            title: self.title,
            address: self.address,
            kind,
            price,
            bedrooms,
            bathrooms: self.bathrooms,
            area,
            image: self.image,
            is_verified: self.is_verified,
            listed_on: self.listed_on,
        })
    }
}

/// Every property in catalog order.
pub fn load_all_properties(conn: &Connection) -> Result<Vec<Property>, ServerError> {
    let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties ORDER BY position, id");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

    let rows = stmt
        .query_map([], PropertyRow::from_row)
        .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        let row = row.map_err(|e| ServerError::DbError(format!("Row read failed: {e}")))?;
        out.push(row.into_property()?);
    }
    Ok(out)
}

pub fn find_property(conn: &Connection, id: &str) -> Result<Option<Property>, ServerError> {
    let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = ?1");
    let row = conn
        .query_row(&sql, params![id], PropertyRow::from_row)
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    match row {
        Some(row) => Ok(Some(row.into_property()?)),
        None => Ok(None),
    }
}

/// The property plus its gallery, features, history and description.
pub fn find_property_detail(
    conn: &Connection,
    id: &str,
) -> Result<Option<PropertyDetail>, ServerError> {
    let Some(property) = find_property(conn, id)? else {
        return Ok(None);
    };

    let description: String = conn
        .query_row(
            "SELECT description FROM properties WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let images = query_strings(
        conn,
        "SELECT url FROM property_images WHERE property_id = ?1 ORDER BY position",
        id,
    )?;
    let features = query_strings(
        conn,
        "SELECT feature FROM property_features WHERE property_id = ?1 ORDER BY position",
        id,
    )?;
    let history = load_history(conn, id)?;

    Ok(Some(PropertyDetail::new(
        property,
        split_paragraphs(&description),
        images,
        features,
        history,
    )))
}

fn query_strings(conn: &Connection, sql: &str, id: &str) -> Result<Vec<String>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![id], |row| row.get::<_, String>(0))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Newest first.
fn load_history(conn: &Connection, id: &str) -> Result<Vec<HistoryEntry>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT event_date, event, price
            FROM property_history
            WHERE property_id = ?1
            ORDER BY event_date DESC, rowid
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![id], |row| {
            Ok((
                row.get::<_, NaiveDate>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<i64>>(2)?,
            ))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        let (date, event, price) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        let price = price
            .map(u64::try_from)
            .transpose()
            .map_err(|_| CatalogError::InvalidField {
                id: id.to_string(),
                field: "history price",
            })?;
        out.push(HistoryEntry { date, event, price });
    }
    Ok(out)
}

/// Paragraphs are stored separated by blank lines.
fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}
