use kernel::id::Id;

pub struct IdentityMarker;
pub type IdentityId = Id<IdentityMarker>;

pub struct CompanyMarker;
pub type CompanyId = Id<CompanyMarker>;

pub struct EmployeeMarker;
pub type EmployeeId = Id<EmployeeMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_v4() {
        assert_eq!(IdentityId::new().as_uuid().get_version_num(), 4);
        assert_eq!(CompanyId::new().as_uuid().get_version_num(), 4);
        assert_eq!(EmployeeId::new().as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let company_id = CompanyId::from_uuid(uuid);
        assert_eq!(company_id.as_uuid(), &uuid);
    }
}
