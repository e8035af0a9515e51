mod school_dto;

pub use school_dto::{
    CreateSchoolDto, ListSchoolsQuery, NearbySchoolsQuery, RankedSchoolDto, SchoolListDto,
    SchoolResponseDto, UpdateSchoolDto,
};
