use kernel::id::Id;

pub struct BlogMarker;
pub type BlogId = Id<BlogMarker>;

pub struct ReviewMarker;
pub type ReviewId = Id<ReviewMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_v4() {
        assert_eq!(BlogId::new().as_uuid().get_version_num(), 4);
        assert_eq!(ReviewId::new().as_uuid().get_version_num(), 4);
    }
}
