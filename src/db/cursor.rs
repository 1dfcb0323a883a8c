use crate::creds::DbParams;
use crate::error::CredsError;
use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgQueryResult, PgRow};
use sqlx::{ConnectOptions, Connection};
use tracing::info;

/// One open database connection used to run queries.
///
/// The cursor owns its connection; closing or dropping the cursor closes it.
#[derive(Debug)]
pub struct Cursor {
    conn: PgConnection,
}

impl Cursor {
    /// Run a statement and return the number of affected rows.
    pub async fn execute(&mut self, sql: &str) -> Result<u64, CredsError> {
        let result: PgQueryResult = sqlx::query(sql).execute(&mut self.conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn fetch_all(&mut self, sql: &str) -> Result<Vec<PgRow>, CredsError> {
        Ok(sqlx::query(sql).fetch_all(&mut self.conn).await?)
    }

    pub async fn fetch_optional(&mut self, sql: &str) -> Result<Option<PgRow>, CredsError> {
        Ok(sqlx::query(sql).fetch_optional(&mut self.conn).await?)
    }

    /// Direct access to the driver connection, e.g. for bound queries.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    pub async fn close(self) -> Result<(), CredsError> {
        self.conn.close().await?;
        Ok(())
    }
}

/// Driver connect options built from discrete parameters.
pub fn connect_options(params: &DbParams) -> Result<PgConnectOptions, CredsError> {
    let port = params.port_number()?;
    Ok(PgConnectOptions::new_without_pgpass()
        .host(&params.host)
        .port(port)
        .database(&params.sid)
        .username(&params.user)
        .password(params.password.expose_secret()))
}

/// Open a connection described by `params`.
pub async fn open(params: &DbParams) -> Result<Cursor, CredsError> {
    let options = connect_options(params)?;
    let conn = options.connect().await?;
    info!(host = %params.host, port = %params.port, database = %params.sid, "database cursor opened");
    Ok(Cursor { conn })
}
