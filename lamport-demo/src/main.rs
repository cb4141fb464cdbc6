use lamport_ots::hash::to_hex;
use lamport_ots::{
    Codec, HashAlgorithm, KeyGenerator, KeyHalves, Params, PublicKey, Signer, Verifier,
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Generates a Lamport key pair, signs a message and verifies it.
#[derive(Parser, Debug)]
#[command(name = "lamport-demo")]
struct Arguments {
    /// Message to sign
    #[arg(short, long, default_value = "Hello cryptocurrency")]
    message: String,

    /// Altered message that must fail verification
    #[arg(short, long, default_value = "Hello Cryptocurrency")]
    tamper: String,

    /// Hash function: blake3, sha256 or sha512
    #[arg(long, default_value_t = HashAlgorithm::Blake3)]
    hash: HashAlgorithm,

    /// How many entries of each key half to print
    #[arg(long, default_value_t = 4)]
    show: usize,
}

fn print_half(label: &str, set: &str, half: &[Vec<u8>], show: usize) {
    for (i, entry) in half.iter().take(show).enumerate() {
        println!("{label}[{i}] (Set {set}) {}", to_hex(entry));
    }
}

fn run(args: Arguments) -> lamport_ots::Result<()> {
    let params = Params::for_hash(args.hash);
    info!(
        key_size = params.key_size(),
        element_size = params.element_size(),
        hash = %params.hash(),
        "using configuration"
    );

    let (private_key, public_key) = KeyGenerator::new(params).generate()?;

    println!("==== Private key (keep secret) =====");
    print_half("Priv[0]", "A", private_key.half(false), args.show);
    print_half("Priv[1]", "B", private_key.half(true), args.show);

    println!("==== Public key (show everyone) ====");
    print_half("Pub[0]", "A", public_key.half(false), args.show);
    print_half("Pub[1]", "B", public_key.half(true), args.show);

    let codec = Codec::new(params);
    let encoded_public_key = codec.encode_key(&public_key);

    println!("==== Message to sign ===============");
    println!("Message: {}", args.message);
    println!("{}: {}", params.hash(), to_hex(params.hash().digest(&args.message)));

    println!("==== Signature =====================");
    let signature = Signer::new(params).sign(private_key, &args.message)?;
    let encoded_signature = codec.encode_signature(&signature);
    println!("Signature: {}", to_hex(&encoded_signature));

    println!("==== Verify ========================");
    let signature = codec.decode_signature(&encoded_signature)?;
    let public_key: PublicKey = codec.decode_key(&encoded_public_key)?;
    let verifier = Verifier::new(params);
    println!(
        "{:?}: {}",
        args.message,
        verifier.verify(&signature, &public_key, &args.message)?
    );
    println!(
        "{:?}: {}",
        args.tamper,
        verifier.verify(&signature, &public_key, &args.tamper)?
    );
    Ok(())
}

fn main() -> lamport_ots::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    run(Arguments::parse())
}
