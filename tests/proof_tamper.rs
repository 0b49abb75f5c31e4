use fibsq_stark::channel::{ChannelError, ProofEntry};
use fibsq_stark::field::FieldElement;
use fibsq_stark::merkle::MerkleError;
use fibsq_stark::proof::{labels, InvalidCheck, Proof, RejectReason, VerifierStep, VerifyError};
use fibsq_stark::ser::{decode_felt, encode_felt, SerError, SerKind};
use fibsq_stark::{prove_fibonacci_square, verify, verify_bytes, PublicInputs, StarkConfig};

struct Fixture {
    config: StarkConfig,
    proof: Proof,
    public_inputs: PublicInputs,
}

impl Fixture {
    fn new() -> Self {
        let config = StarkConfig::builder()
            .domain_size(64)
            .domain_ex_mult(4)
            .build()
            .expect("valid config");
        let (proof, public_inputs, _) = prove_fibonacci_square(&config).expect("honest proof");
        Self {
            config,
            proof,
            public_inputs,
        }
    }

    fn verify(&self, proof: &Proof) -> Result<(), VerifyError> {
        verify(&self.config, &self.public_inputs, proof)
    }
}

fn bump_felt(entry: &mut ProofEntry) {
    let value = decode_felt(&entry.value).expect("field element entry");
    entry.value = encode_felt(value + FieldElement::ONE);
}

fn flip_byte(entry: &mut ProofEntry, position: usize) {
    entry.value[position] ^= 0x01;
}

#[test]
fn honest_proof_is_accepted() {
    let fixture = Fixture::new();
    fixture.verify(&fixture.proof).unwrap();
}

#[test]
fn tampered_trace_root_is_rejected() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    flip_byte(proof.find_mut(labels::TRACE_ROOT).unwrap(), 0);
    let err = fixture.verify(&proof).unwrap_err();
    assert_eq!(err.step, VerifierStep::VerifyTraceOpenings);
    assert!(matches!(
        err.reason,
        RejectReason::Verification(MerkleError::VerificationFailed { .. })
    ));
}

#[test]
fn tampered_fri_root_is_rejected() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    flip_byte(proof.find_mut(&labels::fri_root(2)).unwrap(), 7);
    let err = fixture.verify(&proof).unwrap_err();
    assert!(matches!(
        err.step,
        VerifierStep::VerifyTraceOpenings | VerifierStep::VerifyFriOpenings(_)
    ));
    assert!(matches!(err.reason, RejectReason::Verification(_)));
}

#[test]
fn tampered_trace_opening_is_rejected() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    bump_felt(proof.find_mut(labels::F_GX).unwrap());
    let err = fixture.verify(&proof).unwrap_err();
    assert_eq!(err.step, VerifierStep::VerifyTraceOpenings);
    assert!(matches!(
        err.reason,
        RejectReason::Verification(MerkleError::VerificationFailed { .. })
    ));
}

#[test]
fn tampered_fri_opening_is_rejected() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    bump_felt(proof.find_mut(&labels::fri_sibling(1)).unwrap());
    let err = fixture.verify(&proof).unwrap_err();
    assert_eq!(err.step, VerifierStep::VerifyFriOpenings(1));
    assert!(matches!(err.reason, RejectReason::Verification(_)));
}

#[test]
fn tampered_authentication_path_is_rejected() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    let label = labels::auth(labels::F_X);
    // Skip the u32 count prefix and corrupt the first sibling.
    flip_byte(proof.find_mut(&label).unwrap(), 4);
    let err = fixture.verify(&proof).unwrap_err();
    assert_eq!(err.step, VerifierStep::VerifyTraceOpenings);
}

#[test]
fn repeated_last_layer_must_match() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    let committed = decode_felt(&proof.find(labels::LAST_FRI_LAYER).unwrap().value).unwrap();
    let last = proof.entries_mut().last_mut().unwrap();
    assert_eq!(last.label, labels::LAST_FRI_LAYER);
    bump_felt(last);
    let err = fixture.verify(&proof).unwrap_err();
    assert_eq!(err.step, VerifierStep::ConsumeProof);
    assert_eq!(
        err.reason,
        RejectReason::ProofInvalid(InvalidCheck::LastLayerMismatch {
            committed,
            decommitted: committed + FieldElement::ONE,
        })
    );
}

#[test]
fn tampered_last_layer_is_rejected() {
    let fixture = Fixture::new();
    let mut proof = fixture.proof.clone();
    for entry in proof.entries_mut() {
        if entry.label == labels::LAST_FRI_LAYER {
            bump_felt(entry);
        }
    }
    assert!(fixture.verify(&proof).is_err());
}

#[test]
fn structural_damage_is_reported_as_protocol_errors() {
    let fixture = Fixture::new();

    let mut truncated = fixture.proof.clone();
    truncated.entries_mut().pop();
    let err = fixture.verify(&truncated).unwrap_err();
    assert_eq!(err.step, VerifierStep::ConsumeProof);
    assert_eq!(
        err.reason,
        RejectReason::Protocol(ChannelError::Exhausted {
            expected: labels::LAST_FRI_LAYER.to_owned(),
        })
    );

    let mut renamed = fixture.proof.clone();
    renamed.entries_mut()[0].label = "root".to_owned();
    let err = fixture.verify(&renamed).unwrap_err();
    assert_eq!(err.step, VerifierStep::ReceiveTraceRoot);
    assert!(matches!(
        err.reason,
        RejectReason::Protocol(ChannelError::LabelMismatch { .. })
    ));

    let mut short_digest = fixture.proof.clone();
    short_digest.entries_mut()[0].value.pop();
    let err = fixture.verify(&short_digest).unwrap_err();
    assert_eq!(err.step, VerifierStep::ReceiveTraceRoot);
    assert!(matches!(
        err.reason,
        RejectReason::Protocol(ChannelError::Malformed { .. })
    ));
}

#[test]
fn damaged_bytes_are_rejected() {
    let fixture = Fixture::new();
    let bytes = fixture.proof.to_bytes().unwrap();

    let mut bad_magic = bytes.clone();
    bad_magic[1] = b'X';
    let err = verify_bytes(&fixture.config, &fixture.public_inputs, &bad_magic).unwrap_err();
    assert_eq!(err.step, VerifierStep::DecodeProof);
    assert_eq!(
        err.reason,
        RejectReason::Encoding(SerError::invalid_value(SerKind::Proof, "magic"))
    );

    let err = verify_bytes(&fixture.config, &fixture.public_inputs, &bytes[..bytes.len() / 2])
        .unwrap_err();
    assert_eq!(err.step, VerifierStep::DecodeProof);

    let mut flipped = bytes.clone();
    let last = flipped.len() - 1;
    flipped[last] ^= 0x80;
    assert!(verify_bytes(&fixture.config, &fixture.public_inputs, &flipped).is_err());
}
