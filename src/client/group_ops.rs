//! Group selection and navigation: GROUP, LISTGROUP, LAST, NEXT

use tracing::trace;

use super::NntpClient;
use crate::commands::{ArticleRange, Command};
use crate::error::Result;
use crate::response::{codes, NntpResponse};

impl NntpClient {
    /// Select a newsgroup (RFC 3977 §6.1.1)
    ///
    /// On 211 the status text carries "count first last name"; parse it
    /// with [`parse_group_status`](crate::commands::parse_group_status).
    /// The selected group is tracked locally for
    /// [`current_group`](Self::current_group).
    pub async fn group(&mut self, name: &str) -> Result<NntpResponse<'_>> {
        trace!("Selecting group: {}", name);

        let head = self.dispatch(Command::Group, &[name]).await?;
        if head.status == codes::GROUP_SELECTED {
            self.current_group = Some(name.to_string());
        }
        Ok(self.into_response(head))
    }

    /// List article numbers in a group (RFC 3977 §6.1.2)
    ///
    /// Also selects the group, like GROUP. The 211 response carries a
    /// multi-line block of article numbers, optionally bounded by `range`;
    /// parse the drained body with
    /// [`parse_article_numbers`](crate::commands::parse_article_numbers).
    pub async fn listgroup(
        &mut self,
        name: Option<&str>,
        range: Option<ArticleRange>,
    ) -> Result<NntpResponse<'_>> {
        let range_arg = range.map(|r| r.to_string());
        let mut args: Vec<&str> = Vec::new();
        if let Some(name) = name {
            args.push(name);
        }
        if let Some(ref range_arg) = range_arg {
            args.push(range_arg);
        }

        let head = self.dispatch(Command::Listgroup, &args).await?;
        if head.status == codes::GROUP_SELECTED {
            if let Some(name) = name {
                self.current_group = Some(name.to_string());
            }
        }
        Ok(self.into_response(head))
    }

    /// Move the current article pointer to the previous article
    /// (RFC 3977 §6.1.3); 223 on success, 422 at the start of the group
    pub async fn last(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::Last, &[]).await
    }

    /// Move the current article pointer to the next article
    /// (RFC 3977 §6.1.4); 223 on success, 421 at the end of the group
    pub async fn next(&mut self) -> Result<NntpResponse<'_>> {
        self.command(Command::Next, &[]).await
    }
}
