use des_cipher::crypto::cipher_traits::BlockCipher;
use des_cipher::crypto::des::DesCipher;
use des_cipher::crypto::error::Result;
use des_cipher::crypto::keygen::generate_demo_key;

fn main() -> Result<()> {
    env_logger::init();

    // --------------------------------------------------------
    // 0) Single-block walkthrough with the textbook key
    // --------------------------------------------------------
    println!("=== Single-block demo ===");
    let des = DesCipher::new("AABB09182736CCDD")?;
    let plaintext = "123456ABCD132536";
    let ciphertext = des.encrypt_block(plaintext)?;
    println!(" Plaintext block: {plaintext}");
    println!(" Encrypted block: {ciphertext}");
    println!(" Decrypted block: {}", des.decrypt_block(&ciphertext)?);

    // --------------------------------------------------------
    // 1) Text round-trip with a generated demo key
    // --------------------------------------------------------
    println!("\n=== Text demo ===");
    let key = generate_demo_key();
    println!(" Demo key: {key}");

    let des = DesCipher::new(&key)?;
    let message = "The quick brown fox jumps over the lazy dog.";
    let encrypted = des.encrypt_text(message)?;
    let decrypted = des.decrypt_text(&encrypted)?;
    println!(" Message:    {message}");
    println!(" Ciphertext: {encrypted}");
    println!(" Decrypted:  {decrypted}");
    assert_eq!(decrypted, message);

    // --------------------------------------------------------
    // 2) Raw-hex bitmap: the caller truncates to its own size
    // --------------------------------------------------------
    println!("\n=== Bitmap demo ===");
    let (width, height) = (3usize, 2usize);
    let bitmap_hex = "00FF7F102030";
    let encrypted = des.encrypt_raw_hex(bitmap_hex)?;
    let decrypted = des.decrypt_raw_hex(&encrypted)?;
    let restored = &decrypted[..width * height * 2];
    println!(" Bitmap {width}x{height}: {bitmap_hex}");
    println!(" Enciphered: {encrypted}");
    println!(" Restored:   {restored}");
    assert_eq!(restored, bitmap_hex);

    Ok(())
}
