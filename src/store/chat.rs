// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::params;
use tracing::debug;

use crate::error::StoreResult;
use crate::models::ChatMessage;

use super::{format_ts, parse_ts, Store};

impl Store {
    pub fn create_chat_message(&mut self, content: &str, is_user: bool) -> StoreResult<ChatMessage> {
        let id = Store::new_id();
        let created_at = self.next_created_at();
        self.conn.execute(
            "INSERT INTO chat_messages(id, content, is_user, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![id, content, is_user, format_ts(created_at)],
        )?;
        debug!(message = %id, is_user, "chat message stored");
        Ok(ChatMessage {
            id,
            content: content.to_string(),
            is_user,
            created_at,
        })
    }

    /// Chat history in ascending `created_at` order.
    pub fn list_chat_messages(&self) -> StoreResult<Vec<ChatMessage>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, content, is_user, created_at FROM chat_messages
             ORDER BY created_at ASC, rowid ASC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, bool>(2)?,
                r.get::<_, String>(3)?,
            ))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (id, content, is_user, created_at) = row?;
            out.push(ChatMessage {
                created_at: parse_ts(&created_at)?,
                id,
                content,
                is_user,
            });
        }
        Ok(out)
    }

    /// Removes all chat messages unconditionally.
    pub fn clear_chat(&mut self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM chat_messages", [])?;
        Ok(())
    }
}
