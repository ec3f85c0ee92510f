pub const HOME_PAGE: &str = "/";
pub const NEW_OWNER: &str = "/owners/new";
/// Reported under this template; requests go to [`new_pet_path`].
pub const NEW_PET: &str = "/owners/{id}/pets/new";

#[must_use]
pub fn new_pet_path(owner_id: &str) -> String {
    NEW_PET.replace("{id}", owner_id)
}
