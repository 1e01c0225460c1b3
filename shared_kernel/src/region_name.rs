use crate::non_empty_string;

non_empty_string!(RegionName);
