//! Unit tests for epi-place.

use epi_core::{AgentId, LocationId};

use crate::{LocationGraph, LocationGraphBuilder, LocationKind};

/// house(0), work(1), school(2), closed business(3), open business(4), gathering(5).
fn town() -> LocationGraph {
    let mut b = LocationGraphBuilder::new();
    b.add(LocationKind::House);
    b.add(LocationKind::Work);
    b.add(LocationKind::School);
    b.add(LocationKind::business(3361)); // auto manufacturing
    b.add(LocationKind::business(4451)); // grocery
    b.add(LocationKind::CommunityGathering);
    b.build()
}

#[cfg(test)]
mod location_tests {
    use crate::{is_public_facing_industry, LocationKind};

    #[test]
    fn industry_codes() {
        assert!(is_public_facing_industry(44));
        assert!(is_public_facing_industry(722511));
        assert!(is_public_facing_industry(8111));
        assert!(!is_public_facing_industry(3361));
        assert!(!is_public_facing_industry(52));
    }

    #[test]
    fn kind_predicates() {
        assert!(LocationKind::House.is_house());
        assert!(LocationKind::business(72).is_public_facing());
        assert!(!LocationKind::Business { public_facing: false }.is_public_facing());
        assert!(!LocationKind::Work.is_business());
        assert_eq!(LocationKind::CommunityGathering.to_string(), "gathering");
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn kinds_and_businesses() {
        let g = town();
        assert_eq!(g.len(), 6);
        assert!(g.is_house(LocationId(0)));
        assert!(!g.is_house(LocationId(1)));
        assert_eq!(g.businesses(), &[LocationId(3), LocationId(4)]);
        assert!(!g.is_public_facing(LocationId(3)));
        assert!(g.is_public_facing(LocationId(4)));
        assert_eq!(g.ids_of_kind(LocationKind::Business { public_facing: false }).len(), 2);
        assert!(g.kind(LocationId(99)).is_none());
        assert!(g.require(LocationId(99)).is_err());
    }

    #[test]
    fn place_and_move() {
        let mut g = town();
        g.place(AgentId(1), LocationId(0)).unwrap();
        g.place(AgentId(2), LocationId(0)).unwrap();
        assert_eq!(g.occupants(LocationId(0)), &[AgentId(1), AgentId(2)]);

        g.move_agent(AgentId(1), LocationId(0), LocationId(5)).unwrap();
        assert_eq!(g.occupants(LocationId(0)), &[AgentId(2)]);
        assert_eq!(g.occupants(LocationId(5)), &[AgentId(1)]);
        assert_eq!(g.occupancy(), 2);
    }

    #[test]
    fn move_to_same_location_is_noop() {
        let mut g = town();
        g.place(AgentId(1), LocationId(2)).unwrap();
        g.move_agent(AgentId(1), LocationId(2), LocationId(2)).unwrap();
        assert_eq!(g.occupants(LocationId(2)), &[AgentId(1)]);
    }

    #[test]
    fn move_to_unknown_location_fails_without_side_effects() {
        let mut g = town();
        g.place(AgentId(1), LocationId(0)).unwrap();
        assert!(g.move_agent(AgentId(1), LocationId(0), LocationId(42)).is_err());
        assert_eq!(g.occupants(LocationId(0)), &[AgentId(1)]);
    }

    #[test]
    fn remove_absent_agent() {
        let mut g = town();
        assert!(!g.remove(AgentId(7), LocationId(0)));
        assert!(!g.remove(AgentId(7), LocationId(77)));
        assert!(g.occupants(LocationId(77)).is_empty());
    }

    #[test]
    fn empty_graph() {
        let g = LocationGraph::empty();
        assert!(g.is_empty());
        assert!(g.businesses().is_empty());
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{load_locations_reader, PlaceError};

    #[test]
    fn loads_out_of_order_rows() {
        let csv = "location_id,kind,industry_code\n\
                   2,business,722511\n\
                   0,house,\n\
                   1,gathering,\n";
        let g = load_locations_reader(Cursor::new(csv)).unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.is_house(LocationId(0)));
        assert_eq!(g.kind(LocationId(1)), Some(LocationKind::CommunityGathering));
        assert!(g.is_public_facing(LocationId(2)));
    }

    #[test]
    fn business_without_code_is_closed() {
        let csv = "location_id,kind,industry_code\n0,business,\n";
        let g = load_locations_reader(Cursor::new(csv)).unwrap();
        assert!(!g.is_public_facing(LocationId(0)));
    }

    #[test]
    fn gap_is_rejected() {
        let csv = "location_id,kind,industry_code\n0,house,\n2,work,\n";
        assert!(matches!(
            load_locations_reader(Cursor::new(csv)),
            Err(PlaceError::Gap(LocationId(1)))
        ));
    }

    #[test]
    fn duplicate_is_rejected() {
        let csv = "location_id,kind,industry_code\n0,house,\n0,work,\n";
        assert!(matches!(
            load_locations_reader(Cursor::new(csv)),
            Err(PlaceError::Duplicate(LocationId(0)))
        ));
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let csv = "location_id,kind,industry_code\n0,castle,\n";
        assert!(matches!(load_locations_reader(Cursor::new(csv)), Err(PlaceError::Parse(_))));
    }
}
