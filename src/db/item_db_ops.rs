//! Item database operations
//!
//! `SqliteDocumentStore` is the document store collaborator backed by the
//! SQLCipher connection from `item_db_conn`. Ids and timestamps are assigned
//! here, and the `secrets` foreign key is what rejects unknown parents.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use rusqlite::{ffi, params, params_from_iter, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::aliases::DbKey;
use crate::error::{CoreError, Result};
use crate::item::{EncryptedFields, Item, NewItem, RecordId};

use super::{open_default_item_db, open_item_db, DocumentStore, ItemFilter};

const ITEM_COLUMNS: &str =
    "id, secret_id, iv, encrypted_name, encrypted_value, created_at, updated_at";

pub struct SqliteDocumentStore {
    conn: Mutex<Connection>,
}

impl SqliteDocumentStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open<P: AsRef<Path>>(db_path: P, key: &DbKey) -> Result<Self> {
        Ok(Self::new(open_item_db(db_path, key)?))
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::new(open_default_item_db()?))
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Register a new parent secret so items can reference it
    pub fn create_secret(&self) -> Result<RecordId> {
        let id = RecordId::generate();
        self.conn()?.execute(
            "INSERT INTO secrets (id, created_at) VALUES (?1, ?2)",
            params![id.as_str(), format_timestamp(&now())],
        )?;
        debug!(secret_id = %id, "created secret");
        Ok(id)
    }

    pub fn secret_exists(&self, secret_id: &str) -> Result<bool> {
        let secret = RecordId::parse(secret_id)?;
        let found = self
            .conn()?
            .query_row(
                "SELECT 1 FROM secrets WHERE id = ?1",
                [secret.as_str()],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn create_record(&self, fields: NewItem) -> Result<Item> {
        let secret = RecordId::parse(&fields.secret_id)
            .map_err(|e| CoreError::Validation(format!("secretId: {e}")))?;
        let id = RecordId::generate();
        let created_at = now();
        let stamp = format_timestamp(&created_at);

        self.conn()?
            .execute(
                &format!("INSERT INTO items ({ITEM_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                params![
                    id.as_str(),
                    secret.as_str(),
                    &fields.encrypted.iv,
                    &fields.encrypted.encrypted_name,
                    &fields.encrypted.encrypted_value,
                    &stamp,
                    &stamp,
                ],
            )
            .map_err(|e| map_insert_error(e, &secret))?;

        Ok(Item::new(id, secret, fields.encrypted, created_at, created_at))
    }

    fn query_records(&self, filter: &ItemFilter) -> Result<Vec<Item>> {
        let (where_clause, args) = build_where(filter)?;
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {ITEM_COLUMNS} FROM items{where_clause}"))?;
        let items = stmt
            .query_map(params_from_iter(args.iter()), row_to_item)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }
}

// Stored with fixed microsecond precision so text order matches time order
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

// Bounds round up to the next whole microsecond; stored values never carry more
fn ceil_to_micros(at: &DateTime<Utc>) -> DateTime<Utc> {
    let truncated = at.trunc_subsecs(6);
    if truncated < *at {
        truncated + Duration::microseconds(1)
    } else {
        truncated
    }
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item::new(
        RecordId::from_trusted(row.get(0)?),
        RecordId::from_trusted(row.get(1)?),
        EncryptedFields {
            iv: row.get(2)?,
            encrypted_name: row.get(3)?,
            encrypted_value: row.get(4)?,
        },
        parse_timestamp(row, 5)?,
        parse_timestamp(row, 6)?,
    ))
}

fn build_where(filter: &ItemFilter) -> Result<(String, Vec<String>)> {
    let mut clauses = Vec::new();
    let mut args = Vec::new();

    if let Some(id) = &filter.id {
        args.push(RecordId::parse(id)?.to_string());
        clauses.push(format!("id = ?{}", args.len()));
    }
    if let Some(secret_id) = &filter.secret_id {
        args.push(RecordId::parse(secret_id)?.to_string());
        clauses.push(format!("secret_id = ?{}", args.len()));
    }
    if let Some(after) = &filter.created_after {
        args.push(format_timestamp(&ceil_to_micros(after)));
        clauses.push(format!("created_at >= ?{}", args.len()));
    }
    if let Some(before) = &filter.created_before {
        args.push(format_timestamp(&ceil_to_micros(before)));
        clauses.push(format!("created_at < ?{}", args.len()));
    }

    if clauses.is_empty() {
        Ok((String::new(), args))
    } else {
        Ok((format!(" WHERE {}", clauses.join(" AND ")), args))
    }
}

fn map_insert_error(err: rusqlite::Error, secret: &RecordId) -> CoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            CoreError::Validation(format!("secretId: secret {secret} does not exist"))
        }
        _ => CoreError::Sql(err),
    }
}
