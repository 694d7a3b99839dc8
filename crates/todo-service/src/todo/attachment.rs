//! Attachment upload URLs for todo items.

use tracing::info;

use todo_auth::Principal;
use todo_core::result::AppResult;

use super::service::TodoService;

impl TodoService {
    /// Issues a pre-signed PUT URL for the attachment of `todo_id` and
    /// records the object's canonical URL on the item.
    ///
    /// The object key is the todo ID, so a second upload replaces the
    /// first. Only the canonical URL is stored; the signed URL goes back
    /// to the caller and nowhere else.
    pub async fn generate_upload_url(
        &self,
        principal: &Principal,
        todo_id: &str,
    ) -> AppResult<String> {
        let user_id = principal.user_id();
        info!(user_id, todo_id, "Generating attachment upload URL");

        self.check_ownership(principal, todo_id).await?;

        let upload_url = self
            .attachments
            .presign_upload(todo_id, self.settings.upload_url_expiration)
            .await?;

        let attachment_url = self.attachments.object_url(todo_id);
        self.store
            .update_attachment(todo_id, &attachment_url)
            .await?;

        info!(user_id, todo_id, %attachment_url, "Attachment upload URL issued");
        Ok(upload_url)
    }
}
