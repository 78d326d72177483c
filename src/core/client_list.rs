//! In-memory list of all clients, kept consistent with the database by
//! a full reload after every mutation. Consumers that render the list
//! subscribe for change notifications and redraw from the snapshot;
//! nothing here depends on how the consumer renders.

use crate::db::pool::DbPool;
use crate::db::queries::clients;
use crate::errors::AppResult;
use crate::models::client::Client;

type Listener = Box<dyn Fn(&[Client])>;

pub struct ClientList {
    pool: DbPool,
    snapshot: Vec<Client>,
    listeners: Vec<Listener>,
}

impl ClientList {
    /// Build the list and populate the snapshot immediately.
    pub fn new(pool: DbPool) -> AppResult<Self> {
        let mut list = Self {
            pool,
            snapshot: Vec::new(),
            listeners: Vec::new(),
        };
        list.refresh()?;
        Ok(list)
    }

    /// The current snapshot, sorted by id so the display order is
    /// stable across reloads.
    pub fn snapshot(&self) -> &[Client] {
        &self.snapshot
    }

    /// Register a change listener. It fires after every successful
    /// refresh, including the ones triggered by add/edit/remove.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Borrow the underlying connection (audit logging, ad-hoc reads).
    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    /// Discard the snapshot and reload it wholesale from the store.
    /// After this returns the snapshot equals the store's state at
    /// this instant.
    pub fn refresh(&mut self) -> AppResult<()> {
        let mut reloaded = clients::get_all(&self.pool.conn)?;
        reloaded.sort_by_key(|c| c.id);

        self.snapshot.clear();
        self.snapshot.extend(reloaded);

        for listener in &self.listeners {
            listener(&self.snapshot);
        }
        Ok(())
    }

    /// Insert a new client, then reload. Returns the client with the
    /// id the store assigned.
    pub fn add(&mut self, client: &Client) -> AppResult<Client> {
        let stored = clients::insert(&self.pool.conn, client)?;
        self.refresh()?;
        Ok(stored)
    }

    /// Update an existing client, then reload. A missing id is a
    /// reported miss; the snapshot is left untouched in that case.
    pub fn edit(&mut self, client: &Client) -> AppResult<()> {
        clients::update(&self.pool.conn, client)?;
        self.refresh()?;
        Ok(())
    }

    /// Delete a client, then reload. Removing an absent id is a no-op
    /// (the reload still runs so the snapshot stays authoritative).
    pub fn remove(&mut self, client: &Client) -> AppResult<()> {
        clients::delete(&self.pool.conn, client.id)?;
        self.refresh()?;
        Ok(())
    }
}
