use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Catalog seeding, listing and paginated search
    Products,
}
