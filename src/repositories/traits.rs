use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// The book is loaded once when the assistant starts and saved once when it
/// closes, so implementations deal in complete snapshots rather than
/// individual contacts.
pub trait AddressBookRepository {
    /// Load the stored address book.
    ///
    /// Returns an empty book when nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
