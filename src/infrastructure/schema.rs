//! Table definitions for the dog walking database.
//!
//! `Schema` is handed explicitly to whatever opens the connection. Tables are
//! listed parents first; `drop_all` walks the list backwards so foreign keys
//! never point at a missing table.

use sea_orm::{ConnectionTrait, DbErr, Statement};

/// A single table and the DDL that creates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
}

#[derive(Debug, Clone)]
pub struct Schema {
    tables: Vec<TableDef>,
}

const OWNERS: TableDef = TableDef {
    name: "owners",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS owners (
            o_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(20) NOT NULL CHECK (length(name) <= 20),
            address VARCHAR(50) NOT NULL CHECK (length(address) <= 50)
        )
        "#,
};

const DOGS: TableDef = TableDef {
    name: "dogs",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS dogs (
            d_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL CHECK (length(name) <= 64),
            size VARCHAR(10) CHECK (length(size) <= 10),
            owner_id INTEGER REFERENCES owners (o_id)
        )
        "#,
};

const WALKERS: TableDef = TableDef {
    name: "walkers",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS walkers (
            w_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL CHECK (length(name) <= 64),
            day VARCHAR(10) NOT NULL CHECK (length(day) <= 10),
            car VARCHAR(20) CHECK (length(car) <= 20)
        )
        "#,
};

// No UNIQUE (dog_id, walker_id): the same pair may be linked more than once.
const WALKERDOGS: TableDef = TableDef {
    name: "walkerdogs",
    create_sql: r#"
        CREATE TABLE IF NOT EXISTS walkerdogs (
            wd_id INTEGER PRIMARY KEY AUTOINCREMENT,
            dog_id INTEGER NOT NULL REFERENCES dogs (d_id),
            walker_id INTEGER NOT NULL REFERENCES walkers (w_id)
        )
        "#,
};

impl Schema {
    /// Owners, dogs, walkers and the dog/walker association table.
    pub fn dog_walkers() -> Self {
        Self {
            tables: vec![OWNERS, DOGS, WALKERS, WALKERDOGS],
        }
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    /// Create every table that does not exist yet
    pub async fn create_all<C: ConnectionTrait>(&self, db: &C) -> Result<(), DbErr> {
        for table in &self.tables {
            db.execute(Statement::from_string(
                db.get_database_backend(),
                table.create_sql.to_owned(),
            ))
            .await?;
        }
        tracing::debug!("Created {} tables", self.tables.len());
        Ok(())
    }

    /// Drop every table, children first. All rows are lost.
    pub async fn drop_all<C: ConnectionTrait>(&self, db: &C) -> Result<(), DbErr> {
        for table in self.tables.iter().rev() {
            db.execute(Statement::from_string(
                db.get_database_backend(),
                format!("DROP TABLE IF EXISTS {}", table.name),
            ))
            .await?;
        }
        tracing::info!("Dropped {} tables", self.tables.len());
        Ok(())
    }

    /// Row count of every table, in schema order
    pub async fn row_counts<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<(&'static str, i64)>, DbErr> {
        let mut counts = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            let row = db
                .query_one(Statement::from_string(
                    db.get_database_backend(),
                    format!("SELECT COUNT(*) AS count FROM {}", table.name),
                ))
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("count of {}", table.name)))?;
            counts.push((table.name, row.try_get::<i64>("", "count")?));
        }
        Ok(counts)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::dog_walkers()
    }
}
