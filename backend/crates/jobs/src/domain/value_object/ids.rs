use kernel::id::Id;

pub struct JobMarker;
pub type JobId = Id<JobMarker>;

pub struct ApplicationMarker;
pub type ApplicationId = Id<ApplicationMarker>;
