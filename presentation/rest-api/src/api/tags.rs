use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Markets,
    Lists,
    Items,
    Analytics,
    Profile,
}
