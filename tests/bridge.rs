#![allow(unused_imports)]

use triplet_core::{
    bridge::{SolverHandle, StructureHandle},
    types::err::BridgeError,
};

mod bridge {
    use super::*;

    #[test]
    fn add_lookup_and_remove_round_trip() {
        #[cfg(feature = "log")]
        env_logger::init();

        let mut structure = StructureHandle::new();
        assert!(structure.add_fact(1, 2, 3).is_ok());
        assert!(structure.is_true(1, 2, 3));

        let mut found = structure.lookup(1, 0, 0);
        found.sort();
        assert_eq!(found, vec![(1, 2, 3)]);

        assert!(structure.remove_fact(1, 2, 3).is_ok());
        assert!(!structure.is_true(1, 2, 3));
    }

    #[test]
    fn zero_node_is_a_bridge_error() {
        let mut structure = StructureHandle::new();
        assert_eq!(
            structure.add_fact(0, 1, 2),
            Err(BridgeError::Structure(
                triplet_core::types::err::StructureError::ZeroNode
            ))
        );
    }

    #[test]
    fn negative_and_out_of_range_positions_are_rejected() {
        let mut structure = StructureHandle::new();
        assert_eq!(structure.add_fact(-1, 2, 3), Err(BridgeError::NonPositiveNode(-1)));
        assert_eq!(
            structure.add_fact(1, 2, i64::MAX),
            Err(BridgeError::NodeOutOfRange(i64::MAX))
        );
    }

    #[test]
    fn solver_handle_decodes_the_wire_encoding() {
        let mut structure = StructureHandle::new();
        structure.add_fact(1, 4, 5).unwrap();
        structure.add_fact(2, 4, 5).unwrap();

        // (-0, 4, 5) with variable 0, distinct from nothing else.
        let constraints = vec![(0, 4, 5)];
        let may_equal = vec![vec![]];

        let mut solver = SolverHandle::new(&structure, 1, &constraints, &may_equal).unwrap();
        assert!(solver.is_valid());

        let mut found = Vec::new();
        loop {
            let assignment = solver.next_assignment();
            if assignment.is_empty() {
                break;
            }
            found.push(assignment);
        }
        found.sort();
        assert_eq!(found, vec![vec![1], vec![2]]);
    }

    #[test]
    fn solver_handle_rejects_unencodable_constraints() {
        let structure = StructureHandle::new();
        let constraints = vec![(i64::MAX, 0, 0)];
        let may_equal = vec![vec![]];

        assert_eq!(
            SolverHandle::new(&structure, 1, &constraints, &may_equal),
            Err(BridgeError::NodeOutOfRange(i64::MAX))
        );
    }
}
