#[non_exhaustive]
pub struct ImageModel;

impl ImageModel {
    pub const IMG3: &'static str = "img3";

    pub const ALL: [&'static str; 1] = [Self::IMG3];
}
