//! The clear-all workflow.
//!
//! [`Cleaner`] owns the API handle and the output sink. The sequence is
//! fixed: verify the server, list collections, print their details and
//! the point total, ask for confirmation unless forced, delete each
//! collection in listing order, print a summary.
//!
//! Only the identity check and the listing can end a run early with an
//! error. Detail lookups and deletions are best effort.

use std::io::{BufRead, Write};

use qclear_ui::format::format_count;
use qclear_ui::styles::{
    render_bullet, render_fail, render_fail_icon, render_heading, render_info_icon, render_pass,
    render_pass_icon, render_warn, render_warn_icon,
};
use tracing::{debug, warn};

use crate::api::QdrantApi;
use crate::error::{ClearError, report};
use crate::summary::{RunOutcome, RunSummary};
use crate::types::{CollectionInfo, ServerInfo};

/// The exact text an operator must type to allow deletion.
pub const CONFIRMATION_PHRASE: &str = "DELETE ALL";

/// Writes a line to the output sink. Write errors (e.g. a closed pipe)
/// are ignored.
macro_rules! say {
    ($self:ident) => {{
        let _ = writeln!($self.out);
    }};
    ($self:ident, $($arg:tt)*) => {{
        let _ = writeln!($self.out, $($arg)*);
    }};
}

/// Drives one clear-all run against a server.
pub struct Cleaner<A, W> {
    api: A,
    url: String,
    out: W,
}

impl<A: QdrantApi, W: Write> Cleaner<A, W> {
    /// Creates a cleaner. `url` is only used in messages; trailing slashes
    /// are stripped.
    pub fn new(api: A, url: &str, out: W) -> Self {
        Self {
            api,
            url: url.trim_end_matches('/').to_string(),
            out,
        }
    }

    /// The normalized server address.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches `GET /` and checks that the server is Qdrant.
    pub fn identify(&self) -> Result<ServerInfo, ClearError> {
        let info = self
            .api
            .server_info()
            .map_err(|source| ClearError::Unreachable {
                url: self.url.clone(),
                source,
            })?;
        if !info.is_qdrant() {
            return Err(ClearError::NotQdrant {
                url: self.url.clone(),
                title: info.title,
            });
        }
        Ok(info)
    }

    /// Checks the server identity, printing the outcome.
    ///
    /// Returns `false` if the server is unreachable or is not Qdrant.
    pub fn verify_server(&mut self) -> bool {
        say!(self, "{} Verifying Qdrant server connection...", render_info_icon());
        match self.identify() {
            Ok(info) => {
                match info.version {
                    Some(version) => say!(
                        self,
                        "{} Connected to Qdrant server (version {version})",
                        render_pass_icon()
                    ),
                    None => say!(self, "{} Connected to Qdrant server", render_pass_icon()),
                }
                true
            }
            Err(err @ ClearError::NotQdrant { .. }) => {
                if let ClearError::NotQdrant { title: Some(title), .. } = &err {
                    debug!(%title, "unrecognized server title");
                }
                say!(self, "{} {}", render_warn_icon(), render_warn(&capitalize(&report(&err))));
                false
            }
            Err(err) => {
                say!(self, "{} {}", render_fail_icon(), render_fail(&capitalize(&report(&err))));
                false
            }
        }
    }

    /// Lists collection names in server order.
    pub fn get_collections(&self) -> Result<Vec<String>, ClearError> {
        self.api
            .list_collections()
            .map_err(ClearError::ListCollections)
    }

    /// Fetches details for one collection, or the default (zero points,
    /// unknown vector size) if the request fails.
    pub fn get_collection_info(&self, name: &str) -> CollectionInfo {
        self.api.collection_info(name).unwrap_or_else(|err| {
            debug!(collection = name, error = %report(&err), "collection info unavailable");
            CollectionInfo::default()
        })
    }

    /// Deletes one collection. On failure prints the reason and returns
    /// `false`.
    pub fn delete_collection(&mut self, name: &str) -> bool {
        match self.api.delete_collection(name) {
            Ok(()) => true,
            Err(err) => {
                let reason = report(&err);
                warn!(collection = name, error = %reason, "delete failed");
                say!(
                    self,
                    "{} Failed to delete collection '{name}': {reason}",
                    render_fail_icon()
                );
                false
            }
        }
    }

    /// Runs the whole workflow after the identity check.
    ///
    /// With `force == false` one line is read from `input` and deletion
    /// only proceeds if it is exactly [`CONFIRMATION_PHRASE`]. Nothing is
    /// read when the server has no collections or when forced.
    pub fn clear_all_collections<R: BufRead>(
        &mut self,
        force: bool,
        input: &mut R,
    ) -> Result<RunSummary, ClearError> {
        say!(self, "{} Connecting to Qdrant at: {}", render_info_icon(), self.url);

        let collections = self.get_collections()?;
        if collections.is_empty() {
            say!(
                self,
                "{} No collections found. Qdrant is already empty.",
                render_pass_icon()
            );
            return Ok(RunSummary::empty());
        }

        say!(self);
        say!(
            self,
            "{} Found {} collection(s):",
            render_info_icon(),
            collections.len()
        );

        let mut total_points: u64 = 0;
        for name in &collections {
            let info = self.get_collection_info(name);
            total_points = total_points.saturating_add(info.points_count);

            say!(self, "  {} {name}", render_bullet());
            say!(self, "    - Points: {}", format_count(info.points_count));
            say!(self, "    - Vector size: {}", info.vector_size_label());
        }

        say!(self);
        say!(
            self,
            "{} Total points across all collections: {}",
            render_info_icon(),
            format_count(total_points)
        );

        let mut summary = RunSummary {
            collections: collections.len(),
            total_points,
            outcome: RunOutcome::Cancelled,
        };

        if !force && !self.confirm(input)? {
            say!(self, "{} {}", render_fail_icon(), render_fail("Deletion cancelled."));
            return Ok(summary);
        }

        say!(self);
        say!(self, "{} Deleting collections...", render_info_icon());

        let mut deleted = 0;
        let mut failed = Vec::new();
        for name in &collections {
            let _ = write!(self.out, "  Deleting '{name}'... ");
            let _ = self.out.flush();
            if self.delete_collection(name) {
                say!(self, "{}", render_pass_icon());
                deleted += 1;
            } else {
                failed.push(name.clone());
            }
        }

        say!(self);
        say!(self, "{}", render_heading("Summary:"));
        say!(
            self,
            "  {} Collections deleted: {deleted}/{}",
            render_bullet(),
            collections.len()
        );

        summary.outcome = RunOutcome::Completed { deleted, failed };
        if summary.all_deleted() {
            say!(
                self,
                "{} {}",
                render_pass_icon(),
                render_pass("All collections successfully deleted!")
            );
        } else {
            say!(
                self,
                "{} {}",
                render_warn_icon(),
                render_warn("Some collections failed to delete.")
            );
        }

        Ok(summary)
    }

    /// Prints the warning and prompt, then reads one line.
    fn confirm<R: BufRead>(&mut self, input: &mut R) -> Result<bool, ClearError> {
        say!(self);
        say!(
            self,
            "{} {}",
            render_warn_icon(),
            render_warn("WARNING: This will permanently delete all collections and their data!")
        );
        let _ = write!(self.out, "Type '{CONFIRMATION_PHRASE}' to confirm: ");
        let _ = self.out.flush();

        // Bytes, not a String: an answer that is not UTF-8 is just a wrong answer.
        let mut line = Vec::new();
        input.read_until(b'\n', &mut line).map_err(ClearError::Prompt)?;
        let answer = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        let answer = answer.strip_suffix(b"\r").unwrap_or(answer);
        Ok(answer == CONFIRMATION_PHRASE.as_bytes())
    }
}

/// Upper-cases the first character of an error message for display.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
